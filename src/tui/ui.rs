use crate::todo::models::TodoItem;
use crate::tui::app::{App, Focus};
use crate::tui::edit::TextBuffer;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // New todo input
            Constraint::Min(0),    // Items
            Constraint::Length(4), // Footer
        ])
        .split(frame.size());

    draw_input(frame, chunks[0], app);
    draw_todo_list(frame, chunks[1], app);
    draw_footer(frame, chunks[2], app);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Input && !app.edit.is_editing() && !app.help_mode;
    let inner_width = area.width.saturating_sub(2) as usize;

    let line = if focused {
        Line::from(buffer_with_cursor(&app.input, inner_width))
    } else if app.input.as_str().is_empty() {
        Line::from(Span::styled("Todo", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(app.input.as_str().to_string())
    };

    let border_style = if focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Add a Todo"),
    );

    frame.render_widget(input, area);
}

fn draw_todo_list(frame: &mut Frame, area: Rect, app: &App) {
    // Borders plus the two-column checkbox.
    let row_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .todo_list
        .items
        .iter()
        .map(|todo| ListItem::new(todo_line(todo, app, row_width)))
        .collect();

    let list_focused = app.focus == Focus::List || app.edit.is_editing();
    let mut list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(list_title(app)),
    );
    if list_focused {
        list = list.highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );
    }

    let mut list_state = ListState::default();
    if !app.todo_list.is_empty() {
        list_state.select(Some(app.navigation.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn list_title(app: &App) -> String {
    if app.selection.active {
        let select_label = if app.all_selected() { "Deselect All" } else { "Select All" };
        format!(
            "{} [selecting] | {} | Delete ({})",
            app.title,
            select_label,
            app.selection.len()
        )
    } else {
        app.title.clone()
    }
}

fn todo_line<'a>(todo: &'a TodoItem, app: &'a App, width: usize) -> Line<'a> {
    if app.edit.is_editing_item(todo.id) {
        let checkbox = if todo.completed { "☑ " } else { "☐ " };
        let style = Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        return Line::from(vec![
            Span::raw(checkbox),
            Span::styled(buffer_with_cursor(&app.edit.draft, width), style),
        ]);
    }

    if app.selection.active {
        let selected = app.selection.is_selected(todo.id);
        let (checkbox, style) = if selected {
            (
                "[x] ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        } else {
            ("[ ] ", Style::default().fg(Color::White))
        };
        return Line::from(vec![
            Span::styled(checkbox, style),
            Span::styled(todo.text.as_str(), style),
        ]);
    }

    let (checkbox, style) = if todo.completed {
        (
            "☑ ",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("☐ ", Style::default().fg(Color::White))
    };

    Line::from(vec![
        Span::styled(checkbox, Style::default().fg(Color::Green)),
        Span::styled(todo.text.as_str(), style),
    ])
}

/// Buffer text with a block cursor, scrolled so the cursor stays inside
/// `width` columns. Text after the cursor is left for the widget to clip.
fn buffer_with_cursor(buffer: &TextBuffer, width: usize) -> String {
    let (mut before_cursor, after_cursor) = buffer.split_at_cursor();
    while Span::raw(before_cursor).width() >= width.max(1) {
        let Some(c) = before_cursor.chars().next() else {
            break;
        };
        before_cursor = &before_cursor[c.len_utf8()..];
    }
    format!("{}█{}", before_cursor, after_cursor)
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.edit.is_editing() {
        "EDIT | Enter: save | Esc: cancel | ←→: cursor | Ctrl+W: delete word"
    } else if app.focus == Focus::Input {
        "INPUT | Enter: add | Tab/Esc: list | Ctrl+C: quit"
    } else if app.selection.active {
        "SELECT | Space: select | a: all | x: delete selected | v/Esc: done"
    } else {
        "↑↓/j/k: move | Enter: done | e: edit | d: delete | v: select | Tab: input | ?: help | q: quit"
    };

    let counts = format!(
        " Items: {} | Completed: {} | Selected: {} ",
        app.total_items(),
        app.completed_items(),
        app.selection.len()
    );

    let footer = Paragraph::new(hints)
        .block(Block::default().borders(Borders::ALL).title(counts))
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: true });

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = vec![
        "Todo - Keyboard Commands",
        "",
        "INPUT LINE:",
        "  Enter             Add the typed todo",
        "  Tab / Esc / ↓     Move to the list",
        "",
        "LIST:",
        "  ↑↓ / j/k          Move cursor",
        "  Enter / Space     Toggle done (or select in selection mode)",
        "  e                 Edit item",
        "  d                 Delete item",
        "  Tab / i           Back to the input line",
        "",
        "SELECTION MODE:",
        "  v                 Enter/leave selection mode",
        "  a                 Select all / deselect all",
        "  x                 Delete selected items",
        "  Esc               Leave selection mode",
        "",
        "EDITING:",
        "  Enter             Save",
        "  Esc               Cancel",
        "  Ctrl+W            Delete word backward",
        "",
        "  q / Ctrl+C        Quit",
        "",
        "Press ? or Esc to close this help window",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    let area = centered_rect(80, 80, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
