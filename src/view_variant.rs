use super::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum ViewVariant {
  /// Linked heading, byline and a divider per story.
  Cards,
  /// Bare story titles.
  Titles,
}

impl ViewVariant {
  pub(crate) fn switched(self) -> Self {
    match self {
      Self::Cards => Self::Titles,
      Self::Titles => Self::Cards,
    }
  }
}

impl fmt::Display for ViewVariant {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Cards => write!(f, "cards"),
      Self::Titles => write!(f, "titles"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn switching_alternates_between_both_variants() {
    assert_eq!(ViewVariant::Cards.switched(), ViewVariant::Titles);
    assert_eq!(ViewVariant::Titles.switched(), ViewVariant::Cards);
  }
}
