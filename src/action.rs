use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
  HideHelp,
  None,
  OpenStory,
  PageDown,
  PageUp,
  Quit,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  SwitchVariant,
}

pub(crate) struct ActionDispatch {
  pub(crate) effects: Vec<Effect>,
  pub(crate) should_exit: bool,
}

impl Action {
  pub(crate) fn for_key(key: KeyEvent) -> Self {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Self::Quit,
      KeyCode::Char('?') => Self::ShowHelp,
      KeyCode::Down | KeyCode::Char('j') => Self::SelectNext,
      KeyCode::Up | KeyCode::Char('k') => Self::SelectPrevious,
      KeyCode::PageDown => Self::PageDown,
      KeyCode::PageUp => Self::PageUp,
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        Self::PageDown
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        Self::PageUp
      }
      KeyCode::Home => Self::SelectFirst,
      KeyCode::End => Self::SelectLast,
      KeyCode::Char('o' | 'O') => Self::OpenStory,
      KeyCode::Char('v' | 'V') => Self::SwitchVariant,
      _ => Self::None,
    }
  }
}
