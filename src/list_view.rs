pub(crate) struct ListView<T> {
  items: Vec<T>,
  offset: usize,
  selected: usize,
}

impl<T> Default for ListView<T> {
  fn default() -> Self {
    Self {
      items: Vec::new(),
      offset: 0,
      selected: 0,
    }
  }
}

impl<T> ListView<T> {
  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn items(&self) -> &[T] {
    &self.items
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  pub(crate) fn new(items: Vec<T>) -> Self {
    Self {
      items,
      offset: 0,
      selected: 0,
    }
  }

  pub(crate) fn offset(&self) -> usize {
    let selected = self.selected_index().unwrap_or(0);

    if self.items.is_empty() {
      0
    } else {
      self.offset.min(selected)
    }
  }

  /// Swaps in a whole new batch of items. Nothing from the previous batch
  /// survives; selection and scroll position are clamped into the new
  /// bounds.
  pub(crate) fn replace(&mut self, items: Vec<T>) {
    self.items = items;

    if self.items.is_empty() {
      self.offset = 0;
      self.selected = 0;
    } else {
      let last = self.items.len().saturating_sub(1);
      self.offset = self.offset.min(last);
      self.selected = self.selected.min(last);
    }
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.items.is_empty() {
      None
    } else {
      Some(self.selected.min(self.items.len().saturating_sub(1)))
    }
  }

  pub(crate) fn selected_item(&self) -> Option<&T> {
    self
      .selected_index()
      .and_then(|index| self.items.get(index))
  }

  pub(crate) fn selected_raw(&self) -> usize {
    self.selected
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    if self.items.is_empty() {
      self.offset = 0;
    } else {
      let max_offset = self.items.len().saturating_sub(1);
      self.offset = offset.min(max_offset);
    }
  }

  pub(crate) fn set_selected(&mut self, index: usize) {
    if self.items.is_empty() {
      self.selected = 0;
    } else {
      self.selected = index.min(self.items.len().saturating_sub(1));
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn selected_index_is_none_when_empty() {
    let view = ListView::<i32>::default();
    assert_eq!(view.selected_index(), None);
    assert!(view.selected_item().is_none());
  }

  #[test]
  fn selection_and_offset_are_clamped_to_bounds() {
    let mut view = ListView::new(vec![1, 2, 3]);

    view.set_selected(10);
    assert_eq!(view.selected_index(), Some(2));

    view.set_offset(10);
    assert_eq!(view.offset(), 2);
  }

  #[test]
  fn replace_leaves_no_residual_items() {
    let mut view = ListView::new(vec!["a", "b", "c"]);

    view.replace(vec!["d"]);

    assert_eq!(view.items(), &["d"]);
  }

  #[test]
  fn replace_clamps_selection_into_new_bounds() {
    let mut view = ListView::new(vec![1, 2, 3]);
    view.set_selected(2);

    view.replace(vec![4]);

    assert_eq!(view.selected_index(), Some(0));
    assert_eq!(view.selected_item(), Some(&4));
  }

  #[test]
  fn replace_with_empty_batch_resets_selection_and_offset() {
    let mut view = ListView::new(vec![1, 2, 3]);
    view.set_selected(2);
    view.set_offset(1);

    view.replace(Vec::new());

    assert!(view.is_empty());
    assert_eq!(view.selected_index(), None);
    assert_eq!(view.offset(), 0);
  }

  #[test]
  fn selecting_index_uses_visible_order() {
    let mut view = ListView::new(vec![10, 20, 30]);

    view.set_selected(0);
    assert_eq!(view.selected_item(), Some(&10));

    view.set_selected(2);
    assert_eq!(view.selected_item(), Some(&30));
  }
}
