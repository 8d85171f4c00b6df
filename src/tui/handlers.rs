use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_list_key(key_event: KeyEvent) -> ListAction {
        if is_ctrl_c(&key_event) {
            return ListAction::Quit;
        }

        match key_event.code {
            KeyCode::Char('q') => ListAction::Quit,
            KeyCode::Esc => ListAction::HandleEscape,
            KeyCode::Up | KeyCode::Char('k') => ListAction::MoveCursorUp,
            KeyCode::Down | KeyCode::Char('j') => ListAction::MoveCursorDown,
            KeyCode::Enter | KeyCode::Char(' ') => ListAction::ToggleItem,
            KeyCode::Char('e') => ListAction::StartEditing,
            KeyCode::Char('d') => ListAction::DeleteItem,
            KeyCode::Char('v') => ListAction::ToggleSelectionMode,
            KeyCode::Char('a') => ListAction::SelectAll,
            KeyCode::Char('x') => ListAction::DeleteSelected,
            KeyCode::Tab | KeyCode::Char('i') => ListAction::FocusInput,
            KeyCode::Char('?') => ListAction::ToggleHelp,
            _ => ListAction::None,
        }
    }

    /// Keys for the new-todo input line.
    pub fn handle_input_key(key_event: KeyEvent) -> InputAction {
        if is_ctrl_c(&key_event) {
            return InputAction::Quit;
        }

        match key_event.code {
            KeyCode::Enter => InputAction::Submit,
            KeyCode::Tab | KeyCode::Esc | KeyCode::Down => InputAction::FocusList,
            _ => match text_action(key_event) {
                Some(action) => InputAction::Text(action),
                None => InputAction::None,
            },
        }
    }

    pub fn handle_edit_key(key_event: KeyEvent) -> EditAction {
        if is_ctrl_c(&key_event) {
            return EditAction::Quit;
        }

        match key_event.code {
            KeyCode::Enter => EditAction::Save,
            KeyCode::Esc => EditAction::Cancel,
            _ => match text_action(key_event) {
                Some(action) => EditAction::Text(action),
                None => EditAction::None,
            },
        }
    }

    pub fn handle_help_key(key_event: KeyEvent) -> HelpAction {
        if is_ctrl_c(&key_event) {
            return HelpAction::Quit;
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => HelpAction::Close,
            _ => HelpAction::None,
        }
    }
}

fn is_ctrl_c(key_event: &KeyEvent) -> bool {
    key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
}

fn text_action(key_event: KeyEvent) -> Option<TextAction> {
    let action = match key_event.code {
        KeyCode::Char('w') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            TextAction::DeleteWordBackward
        }
        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            TextAction::InsertChar(c)
        }
        KeyCode::Backspace => TextAction::Backspace,
        KeyCode::Delete => TextAction::Delete,
        KeyCode::Left => TextAction::MoveCursorLeft,
        KeyCode::Right => TextAction::MoveCursorRight,
        KeyCode::Home => TextAction::MoveCursorHome,
        KeyCode::End => TextAction::MoveCursorEnd,
        _ => return None,
    };
    Some(action)
}

#[derive(Debug, PartialEq)]
pub enum ListAction {
    None,
    Quit,
    HandleEscape,
    MoveCursorUp,
    MoveCursorDown,
    ToggleItem, // Completion normally, selection in selection mode
    StartEditing,
    DeleteItem,
    ToggleSelectionMode,
    SelectAll,
    DeleteSelected,
    FocusInput,
    ToggleHelp,
}

#[derive(Debug, PartialEq)]
pub enum InputAction {
    None,
    Quit,
    Submit,
    FocusList,
    Text(TextAction),
}

#[derive(Debug, PartialEq)]
pub enum EditAction {
    None,
    Quit,
    Save,
    Cancel,
    Text(TextAction),
}

#[derive(Debug, PartialEq)]
pub enum HelpAction {
    None,
    Quit,
    Close,
}

#[derive(Debug, PartialEq)]
pub enum TextAction {
    InsertChar(char),
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    DeleteWordBackward,
}
