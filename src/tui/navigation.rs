/// Row cursor over the rendered list.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub selected_index: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, max_items: usize) {
        if self.selected_index < max_items.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Keeps the cursor on a valid row after the list shrank.
    pub fn clamp(&mut self, max_items: usize) {
        if self.selected_index >= max_items {
            self.selected_index = max_items.saturating_sub(1);
        }
    }
}
