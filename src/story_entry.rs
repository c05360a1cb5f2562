use super::*;

pub(crate) struct StoryEntry {
  pub(crate) byline: Option<String>,
  pub(crate) id: u64,
  pub(crate) title: String,
}

impl From<Story> for StoryEntry {
  fn from(story: Story) -> Self {
    let mut parts = Vec::new();

    if let Some(score) = story.score {
      parts.push(format_points(score));
    }

    if let Some(by) = story.by {
      parts.push(format!("by {by}"));
    }

    let mut byline = parts.join(" ");

    if let Some(descendants) = story.descendants {
      let comments = format_comments(descendants);

      byline = if byline.is_empty() {
        comments
      } else {
        format!("{byline} | {comments}")
      };
    }

    Self {
      byline: (!byline.is_empty()).then_some(byline),
      id: story.id,
      title: story.title,
    }
  }
}

impl StoryEntry {
  pub(crate) fn heading(&self) -> String {
    format!("[#{}] {}", self.id, self.title)
  }

  pub(crate) fn item_url(&self) -> String {
    format!("https://news.ycombinator.com/item?id={}", self.id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn full_story() -> Story {
    Story {
      by: Some("alice".to_string()),
      descendants: Some(3),
      id: 1,
      score: Some(10),
      title: "Foo".to_string(),
    }
  }

  #[test]
  fn full_record_builds_the_complete_byline() {
    let entry = StoryEntry::from(full_story());

    assert_eq!(
      entry.byline.as_deref(),
      Some("10 points by alice | 3 comments")
    );
  }

  #[test]
  fn heading_links_the_identifier_and_title() {
    let entry = StoryEntry::from(full_story());

    assert_eq!(entry.heading(), "[#1] Foo");
    assert_eq!(entry.item_url(), "https://news.ycombinator.com/item?id=1");
  }

  #[test]
  fn singular_counts_use_singular_nouns() {
    let entry = StoryEntry::from(Story {
      by: Some("bob".to_string()),
      descendants: Some(1),
      id: 2,
      score: Some(1),
      title: "Bar".to_string(),
    });

    assert_eq!(entry.byline.as_deref(), Some("1 point by bob | 1 comment"));
  }

  #[test]
  fn partial_records_render_only_the_parts_present() {
    let entry = StoryEntry::from(Story {
      by: None,
      descendants: None,
      id: 3,
      score: Some(5),
      title: "Baz".to_string(),
    });

    assert_eq!(entry.byline.as_deref(), Some("5 points"));

    let entry = StoryEntry::from(Story {
      by: None,
      descendants: Some(2),
      id: 4,
      score: None,
      title: "Qux".to_string(),
    });

    assert_eq!(entry.byline.as_deref(), Some("2 comments"));

    let entry = StoryEntry::from(Story {
      by: None,
      descendants: None,
      id: 5,
      score: None,
      title: "Quux".to_string(),
    });

    assert!(entry.byline.is_none());
  }
}
