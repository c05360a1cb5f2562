use super::*;

pub(crate) struct App {
  event_rx: UnboundedReceiver<Event>,
  keep_alive: KeepAlive,
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(layout[1].height as usize);

    let (connection_label, connection_color) = if self.state.connected() {
      ("live", Color::Green)
    } else {
      ("offline", Color::Red)
    };

    let header = Paragraph::new(Line::from(vec![
      Span::styled(
        "eslnews",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
      ),
      Span::raw("  "),
      Span::styled(connection_label, Style::default().fg(connection_color)),
      Span::raw("  "),
      Span::styled(
        self.state.variant().to_string(),
        Style::default().fg(Color::DarkGray),
      ),
    ]));

    frame.render_widget(header, layout[0]);

    let variant = self.state.variant();
    let width = layout[1].width;
    let placeholder = self.state.placeholder();

    let view = self.state.stories();

    let list_items: Vec<ListItem> = if view.is_empty() {
      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(placeholder),
      ]))]
    } else {
      view
        .items()
        .iter()
        .map(|entry| ListItem::new(Self::story_lines(entry, variant, width)))
        .collect()
    };

    let selected_index = view.selected_index();
    let offset = view.offset();

    let mut list_state = ListState::default()
      .with_selected(selected_index)
      .with_offset(offset);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[1], &mut list_state);

    self.state.stories_mut().set_offset(list_state.offset());

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
      Effect::SchedulePing => self.keep_alive.schedule(),
    }
  }

  pub(crate) fn new(
    event_rx: UnboundedReceiver<Event>,
    keep_alive: KeepAlive,
    variant: ViewVariant,
  ) -> Self {
    Self {
      event_rx,
      keep_alive,
      state: State::new(variant),
    }
  }

  fn process_pending_events(&mut self) -> Result {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event)?;
    }

    for effect in self.state.take_pending_effects() {
      self.execute_effect(effect);
    }

    Ok(())
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events()?;

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let action = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        Action::for_key(key)
      };

      let dispatch = self.state.dispatch_action(action);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        break;
      }
    }

    Ok(())
  }

  fn story_lines(
    entry: &StoryEntry,
    variant: ViewVariant,
    available_width: u16,
  ) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    match variant {
      ViewVariant::Cards => {
        lines.push(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(
            entry.heading(),
            Style::default()
              .fg(Color::Cyan)
              .add_modifier(Modifier::UNDERLINED),
          ),
        ]));

        if let Some(byline) = &entry.byline {
          lines.push(Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::styled(byline.clone(), Style::default().fg(Color::DarkGray)),
          ]));
        }

        let rule_width = (available_width as usize)
          .saturating_sub(BASE_INDENT.len() * 2)
          .max(1);

        lines.push(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(
            "─".repeat(rule_width),
            Style::default().fg(Color::DarkGray),
          ),
        ]));
      }
      ViewVariant::Titles => {
        lines.push(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(entry.title.clone(), Style::default().fg(Color::White)),
        ]));

        lines.push(Line::from(Span::raw(BASE_INDENT)));
      }
    }

    lines
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn card_entry() -> StoryEntry {
    StoryEntry::from(Story {
      by: Some("alice".to_string()),
      descendants: Some(3),
      id: 1,
      score: Some(10),
      title: "Foo".to_string(),
    })
  }

  fn line_text(line: &Line) -> String {
    line
      .spans
      .iter()
      .map(|span| span.content.as_ref())
      .collect()
  }

  #[test]
  fn card_variant_renders_heading_byline_and_divider() {
    let lines = App::story_lines(&card_entry(), ViewVariant::Cards, 40);

    assert_eq!(lines.len(), 3);

    assert_eq!(line_text(&lines[0]), format!("{BASE_INDENT}[#1] Foo"));
    assert_eq!(
      line_text(&lines[1]),
      format!("{BASE_INDENT}10 points by alice | 3 comments")
    );
    assert!(line_text(&lines[2]).contains('─'));
  }

  #[test]
  fn title_variant_renders_the_title_only() {
    let lines = App::story_lines(&card_entry(), ViewVariant::Titles, 40);

    assert_eq!(lines.len(), 2);
    assert_eq!(line_text(&lines[0]), format!("{BASE_INDENT}Foo"));
  }

  #[test]
  fn card_without_byline_skips_the_byline_line() {
    let entry = StoryEntry::from(Story {
      by: None,
      descendants: None,
      id: 2,
      score: None,
      title: "Bar".to_string(),
    });

    let lines = App::story_lines(&entry, ViewVariant::Cards, 40);

    assert_eq!(lines.len(), 2);
    assert_eq!(line_text(&lines[0]), format!("{BASE_INDENT}[#2] Bar"));
  }

  #[test]
  fn blocks_appear_in_input_order() {
    let entries: Vec<StoryEntry> = [(1, "First"), (2, "Second"), (3, "Third")]
      .into_iter()
      .map(|(id, title)| {
        StoryEntry::from(Story {
          by: None,
          descendants: None,
          id,
          score: None,
          title: title.to_string(),
        })
      })
      .collect();

    let headings: Vec<String> = entries
      .iter()
      .map(|entry| {
        line_text(&App::story_lines(entry, ViewVariant::Cards, 40)[0])
      })
      .collect();

    assert_eq!(
      headings,
      vec![" [#1] First", " [#2] Second", " [#3] Third"]
    );
  }
}
