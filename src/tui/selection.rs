use std::collections::HashSet;

/// Multi-select state for bulk deletion. The set is only meaningful while
/// `active` is true and is emptied whenever the mode flips.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub active: bool,
    pub selected: HashSet<u64>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_mode(&mut self) {
        self.active = !self.active;
        self.selected.clear();
    }

    pub fn exit(&mut self) {
        self.active = false;
        self.selected.clear();
    }

    pub fn toggle(&mut self, id: u64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.contains(&id)
    }

    /// True when the selection is exactly `all_ids`.
    pub fn covers(&self, all_ids: &HashSet<u64>) -> bool {
        self.selected == *all_ids
    }

    /// Selects every id in `all_ids`, or clears the selection when it
    /// already equals that set.
    pub fn select_all(&mut self, all_ids: HashSet<u64>) {
        if self.covers(&all_ids) {
            self.selected.clear();
        } else {
            self.selected = all_ids;
        }
    }

    pub fn forget(&mut self, id: u64) {
        self.selected.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
