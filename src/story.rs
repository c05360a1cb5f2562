use super::*;

/// One record of the pushed feed. Instances only live for the duration of a
/// single render; every message replaces the previous batch wholesale.
#[derive(Debug, Deserialize)]
pub(crate) struct Story {
  pub(crate) by: Option<String>,
  pub(crate) descendants: Option<u64>,
  pub(crate) id: u64,
  pub(crate) score: Option<u64>,
  pub(crate) title: String,
}
