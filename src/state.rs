use super::*;

pub(crate) struct State {
  connected: bool,
  feed_received: bool,
  help: HelpView,
  list_height: usize,
  message: String,
  pending_effects: Vec<Effect>,
  stories: ListView<StoryEntry>,
  transient_message: Option<TransientMessage>,
  variant: ViewVariant,
}

impl State {
  pub(crate) fn connected(&self) -> bool {
    self.connected
  }

  pub(crate) fn dispatch_action(&mut self, action: Action) -> ActionDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "action dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match action {
      Action::Quit => {
        should_exit = true;
      }
      Action::ShowHelp => self.help.show(&mut self.message),
      Action::HideHelp => self.help.hide(&mut self.message),
      Action::SelectNext => {
        let current = self.stories.selected_raw();
        self.select_index(current.saturating_add(1));
      }
      Action::SelectPrevious => {
        let current = self.stories.selected_raw();
        self.select_index(current.saturating_sub(1));
      }
      Action::PageDown => {
        let current = self.stories.selected_raw();
        let jump = self.page_jump();
        self.select_index(current.saturating_add(jump));
      }
      Action::PageUp => {
        let current = self.stories.selected_raw();
        let jump = self.page_jump();
        self.select_index(current.saturating_sub(jump));
      }
      Action::SelectFirst => self.select_index(0),
      Action::SelectLast => {
        self.select_index(self.stories.len().saturating_sub(1));
      }
      Action::OpenStory => {
        if let Some(entry) = self.stories.selected_item() {
          self.pending_effects.push(Effect::OpenUrl {
            url: entry.item_url(),
          });
        }
      }
      Action::SwitchVariant => {
        self.variant = self.variant.switched();

        if !self.help.is_visible() {
          self.set_transient_message(format!(
            "Switched to the {} layout",
            self.variant
          ));
        }
      }
      Action::None => {}
    }

    ActionDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) -> Result {
    match event {
      Event::Closed => {
        self.connected = false;

        if !self.help.is_visible() {
          self.set_transient_message("Connection closed".to_string());
        }
      }
      Event::FeedUpdate { result } => {
        let stories = result?;

        self.feed_received = true;

        self
          .stories
          .replace(stories.into_iter().map(StoryEntry::from).collect());

        // One deferred keep-alive per message, regardless of content.
        self.pending_effects.push(Effect::SchedulePing);
      }
      Event::Opened => {
        self.connected = true;
      }
    }

    Ok(())
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(variant: ViewVariant) -> Self {
    Self {
      connected: false,
      feed_received: false,
      help: HelpView::new(),
      list_height: 0,
      message: LIST_STATUS.into(),
      pending_effects: Vec::new(),
      stories: ListView::default(),
      transient_message: None,
      variant,
    }
  }

  fn page_jump(&self) -> usize {
    self.list_height.saturating_sub(1).max(1)
  }

  pub(crate) fn placeholder(&self) -> &'static str {
    if self.feed_received {
      EMPTY_FEED_STATUS
    } else {
      WAITING_STATUS
    }
  }

  fn select_index(&mut self, index: usize) {
    if !self.stories.is_empty() {
      self.stories.set_selected(index);
    }
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, text: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message = Some(TransientMessage::new(text.clone(), original));
    self.message = text;
  }

  pub(crate) fn stories(&self) -> &ListView<StoryEntry> {
    &self.stories
  }

  pub(crate) fn stories_mut(&mut self) -> &mut ListView<StoryEntry> {
    &mut self.stories
  }

  pub(crate) fn take_pending_effects(&mut self) -> Vec<Effect> {
    std::mem::take(&mut self.pending_effects)
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }

  pub(crate) fn variant(&self) -> ViewVariant {
    self.variant
  }
}
