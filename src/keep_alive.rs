use super::*;

pub(crate) const KEEP_ALIVE_DELAY: Duration = Duration::from_secs(10);

pub(crate) const KEEP_ALIVE_PAYLOAD: &str = "ping";

/// Schedules the deferred `ping` sent back after every feed message. Each
/// call spawns its own one-shot timer; a later schedule never cancels an
/// earlier pending send.
pub(crate) struct KeepAlive {
  handle: Handle,
  outbound_tx: UnboundedSender<String>,
}

impl KeepAlive {
  pub(crate) fn new(
    handle: Handle,
    outbound_tx: UnboundedSender<String>,
  ) -> Self {
    Self {
      handle,
      outbound_tx,
    }
  }

  pub(crate) fn schedule(&self) {
    let outbound_tx = self.outbound_tx.clone();

    self.handle.spawn(async move {
      tokio::time::sleep(KEEP_ALIVE_DELAY).await;

      if outbound_tx.send(KEEP_ALIVE_PAYLOAD.into()).is_err() {
        debug!("keep-alive skipped, connection is gone");
      }
    });
  }
}
