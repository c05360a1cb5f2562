use super::*;

pub(crate) enum Event {
  Closed,
  FeedUpdate { result: Result<Vec<Story>> },
  Opened,
}
