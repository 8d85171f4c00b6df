use crate::todo::models::{TodoItem, TodoList};
use crate::tui::edit::{EditState, TextBuffer};
use crate::tui::handlers::{EditAction, HelpAction, InputAction, KeyHandler, ListAction, TextAction};
use crate::tui::navigation::NavigationState;
use crate::tui::selection::SelectionState;
use anyhow::Result;
use crossterm::event::KeyEvent;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

/// The todo widget. Each instance owns its list and all transient UI state.
#[derive(Debug)]
pub struct App {
    pub todo_list: TodoList,
    pub title: String,
    pub input: TextBuffer,
    pub edit: EditState,
    pub selection: SelectionState,
    pub navigation: NavigationState,
    pub focus: Focus,
    pub help_mode: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(title: String) -> Self {
        Self {
            todo_list: TodoList::new(),
            title,
            input: TextBuffer::new(),
            edit: EditState::new(),
            selection: SelectionState::new(),
            navigation: NavigationState::new(),
            focus: Focus::Input,
            help_mode: false,
            should_quit: false,
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            self.handle_help_key(key_event)
        } else if self.edit.is_editing() {
            self.handle_edit_key(key_event)
        } else {
            match self.focus {
                Focus::Input => self.handle_input_key(key_event),
                Focus::List => self.handle_list_key(key_event),
            }
        }
    }

    fn handle_list_key(&mut self, key_event: KeyEvent) -> Result<()> {
        let selecting = self.selection.active;

        match KeyHandler::handle_list_key(key_event) {
            ListAction::Quit => self.should_quit = true,
            ListAction::HandleEscape => {
                if selecting {
                    self.toggle_selection_mode();
                }
            }
            ListAction::MoveCursorUp => self.navigation.move_up(),
            ListAction::MoveCursorDown => self.navigation.move_down(self.todo_list.len()),
            ListAction::ToggleItem => {
                if let Some(id) = self.cursor_id() {
                    if selecting {
                        self.toggle_select(id);
                    } else {
                        self.toggle_complete(id);
                    }
                }
            }
            // Per-item edit and delete controls are hidden while selecting.
            ListAction::StartEditing if !selecting => {
                if let Some(item) = self.cursor_item().cloned() {
                    self.start_editing(item.id, item.text);
                }
            }
            ListAction::DeleteItem if !selecting => {
                if let Some(id) = self.cursor_id() {
                    self.delete_todo(id);
                }
            }
            ListAction::ToggleSelectionMode => self.toggle_selection_mode(),
            ListAction::SelectAll if selecting => self.select_all(),
            // Bulk delete is disabled until something is selected.
            ListAction::DeleteSelected if selecting && !self.selection.is_empty() => {
                self.delete_selected();
            }
            ListAction::FocusInput => self.focus = Focus::Input,
            ListAction::ToggleHelp => self.help_mode = true,
            _ => {}
        }
        Ok(())
    }

    fn handle_input_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_input_key(key_event) {
            InputAction::Quit => self.should_quit = true,
            InputAction::Submit => self.submit_input(),
            InputAction::FocusList => self.focus = Focus::List,
            InputAction::Text(action) => apply_text_action(&mut self.input, action),
            InputAction::None => {}
        }
        Ok(())
    }

    fn handle_edit_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_edit_key(key_event) {
            EditAction::Quit => self.should_quit = true,
            EditAction::Save => self.save_edit(),
            EditAction::Cancel => self.cancel_edit(),
            EditAction::Text(action) => apply_text_action(&mut self.edit.draft, action),
            EditAction::None => {}
        }
        Ok(())
    }

    fn handle_help_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_help_key(key_event) {
            HelpAction::Quit => self.should_quit = true,
            HelpAction::Close => self.help_mode = false,
            HelpAction::None => {}
        }
        Ok(())
    }

    pub fn cursor_item(&self) -> Option<&TodoItem> {
        self.todo_list.items.get(self.navigation.selected_index)
    }

    fn cursor_id(&self) -> Option<u64> {
        self.cursor_item().map(|item| item.id)
    }

    /// Adds the new-todo buffer as an item.
    pub fn submit_input(&mut self) {
        let text = self.input.as_str().to_string();
        self.add_todo(&text);
    }

    /// Appends a todo and clears the input line. Blank text is ignored and
    /// the input line is left as it was.
    pub fn add_todo(&mut self, text: &str) -> Option<u64> {
        let id = self.todo_list.add(text)?;
        self.input.clear();
        debug!(id, "added todo");
        Some(id)
    }

    pub fn delete_todo(&mut self, id: u64) {
        if self.todo_list.remove(id).is_none() {
            return;
        }

        self.selection.forget(id);
        if self.edit.is_editing_item(id) {
            self.edit.discard();
        }
        self.navigation.clamp(self.todo_list.len());
        debug!(id, "deleted todo");
    }

    /// Removes every selected item and leaves selection mode.
    pub fn delete_selected(&mut self) {
        let removed = self.todo_list.remove_many(&self.selection.selected);
        if let Some(target) = self.edit.target {
            if !self.todo_list.contains(target) {
                self.edit.discard();
            }
        }
        self.selection.exit();
        self.navigation.clamp(self.todo_list.len());
        debug!(removed, "deleted selected todos");
    }

    /// Flips completion. Does nothing in selection mode, where the
    /// completion control is hidden.
    pub fn toggle_complete(&mut self, id: u64) {
        if self.selection.active {
            return;
        }
        if self.todo_list.toggle_completed(id) {
            debug!(id, "toggled completion");
        }
    }

    pub fn start_editing(&mut self, id: u64, current_text: String) {
        if !self.todo_list.contains(id) {
            return;
        }
        if let Some(previous) = self.edit.target.filter(|&previous| previous != id) {
            debug!(id = previous, "dropped unsaved edit");
        }
        self.edit.begin(id, current_text);
        debug!(id, "started editing");
    }

    /// Commits the trimmed draft unless it is blank, then stops editing.
    pub fn save_edit(&mut self) {
        if let Some((id, draft)) = self.edit.finish() {
            let updated = self.todo_list.set_text(id, &draft);
            debug!(id, updated, "finished editing");
        }
    }

    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.edit.target {
            debug!(id, "cancelled editing");
        }
        self.edit.discard();
    }

    pub fn toggle_selection_mode(&mut self) {
        self.selection.toggle_mode();
        if self.selection.active {
            self.cancel_edit();
        }
        debug!(active = self.selection.active, "toggled selection mode");
    }

    pub fn toggle_select(&mut self, id: u64) {
        if self.selection.active && self.todo_list.contains(id) {
            self.selection.toggle(id);
        }
    }

    pub fn select_all(&mut self) {
        if self.selection.active {
            self.selection.select_all(self.todo_list.ids());
        }
    }

    /// True when every current item is selected, which flips the bulk
    /// control to "Deselect All".
    pub fn all_selected(&self) -> bool {
        self.selection.covers(&self.todo_list.ids())
    }

    pub fn total_items(&self) -> usize {
        self.todo_list.total_items()
    }

    pub fn completed_items(&self) -> usize {
        self.todo_list.completed_items()
    }
}

fn apply_text_action(buffer: &mut TextBuffer, action: TextAction) {
    match action {
        TextAction::InsertChar(c) => buffer.insert_char(c),
        TextAction::Backspace => buffer.backspace(),
        TextAction::Delete => buffer.delete(),
        TextAction::MoveCursorLeft => buffer.move_cursor_left(),
        TextAction::MoveCursorRight => buffer.move_cursor_right(),
        TextAction::MoveCursorHome => buffer.move_cursor_home(),
        TextAction::MoveCursorEnd => buffer.move_cursor_end(),
        TextAction::DeleteWordBackward => buffer.delete_word_backward(),
    }
}
