use super::*;

/// The single socket to the feed server. Opened once at startup and torn
/// down on exit; there is no reconnect.
pub(crate) struct Connection {
  outbound_tx: UnboundedSender<String>,
  reader: JoinHandle<()>,
  writer: JoinHandle<()>,
}

impl Connection {
  pub(crate) fn close(&self) {
    self.reader.abort();
    self.writer.abort();
  }

  pub(crate) async fn open(
    endpoint: &Url,
    events: UnboundedSender<Event>,
  ) -> Result<Self> {
    let (stream, _response) = connect_async(endpoint.as_str()).await?;

    info!("[ws open] {endpoint}");

    let _ = events.send(Event::Opened);

    let (mut sink, mut source) = stream.split();

    let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel::<String>();

    let writer = tokio::spawn(async move {
      while let Some(frame) = outbound_rx.recv().await {
        debug!("[ws send] {frame}");

        if let Err(error) = sink.send(Message::text(frame)).await {
          warn!("[ws send] failed: {error}");
          break;
        }
      }
    });

    let reader = tokio::spawn(async move {
      while let Some(inbound) = source.next().await {
        match inbound {
          Ok(Message::Text(payload)) => {
            debug!("[ws data] {}", payload.as_str());

            let result = serde_json::from_str::<Vec<Story>>(payload.as_str())
              .context("could not parse story feed");

            if events.send(Event::FeedUpdate { result }).is_err() {
              return;
            }
          }
          Ok(Message::Close(frame)) => {
            info!("[ws close] {frame:?}");
            break;
          }
          Ok(_) => {}
          Err(error) => {
            warn!("[ws error] {error}");
            break;
          }
        }
      }

      let _ = events.send(Event::Closed);
    });

    Ok(Self {
      outbound_tx,
      reader,
      writer,
    })
  }

  pub(crate) fn sender(&self) -> UnboundedSender<String> {
    self.outbound_tx.clone()
  }
}
