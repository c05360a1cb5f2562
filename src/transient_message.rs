use super::*;

const TRANSIENT_MESSAGE_TTL: Duration = Duration::from_secs(3);

#[derive(Clone)]
pub(crate) struct TransientMessage {
  current: String,
  expires_at: Instant,
  original: String,
}

impl TransientMessage {
  pub(crate) fn current(&self) -> &str {
    &self.current
  }

  pub(crate) fn is_expired(&self) -> bool {
    Instant::now() >= self.expires_at
  }

  pub(crate) fn new(current: String, original: String) -> Self {
    Self {
      expires_at: Instant::now() + TRANSIENT_MESSAGE_TTL,
      current,
      original,
    }
  }

  pub(crate) fn original(&self) -> &str {
    &self.original
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fresh_message_is_not_expired() {
    let message =
      TransientMessage::new("shown".to_string(), "restored".to_string());

    assert!(!message.is_expired());
    assert_eq!(message.current(), "shown");
    assert_eq!(message.original(), "restored");
  }
}
