use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::{
    application::{notifications::Level, todo_store::Selection},
    domain::todo::Todo,
};

use super::app::{App, Focus, ScreenLayout};

pub const TITLE: &str = "Todoer Starter";
pub const EMPTY_LIST: &str = "No todos...";
const NAME_PLACEHOLDER: &str = "New task";
const DESCRIPTION_PLACEHOLDER: &str = "Optional description";
const HELP: &str = "Tab: next field  Ctrl-S: add  Enter: open item  q: quit";

/// Lines a todo occupies in the list: its name plus any description lines.
pub fn row_height(todo: &Todo) -> u16 {
    let extra = if todo.has_description() { todo.description.lines().count() } else { 0 };
    u16::try_from(1 + extra).unwrap_or(u16::MAX)
}

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.size());

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, chunks[0]);

    let mut layout = ScreenLayout::default();
    draw_form(f, app, &chunks[1..4], &mut layout);
    layout.list = draw_list(f, app, chunks[4]);
    draw_footer(f, app, chunks[5]);

    if let Selection::Selected { name, .. } = app.store.selection() {
        let (dialog, buttons) = draw_dialog(f, name, app.store.selection().toggle_label());
        layout.dialog = Some(dialog);
        layout.dialog_buttons = buttons;
    }
    app.layout = layout;
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused { Style::default().fg(Color::Cyan) } else { Style::default().fg(Color::Gray) };
    Block::default().borders(Borders::ALL).title(title).border_style(style)
}

fn placeholder(text: &str) -> Line<'_> {
    Line::styled(text, Style::default().fg(Color::DarkGray))
}

fn draw_form(f: &mut Frame, app: &App, rows: &[Rect], layout: &mut ScreenLayout) {
    let draft = app.store.draft();
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(rows[0]);

    let name_block = field_block("Name", app.focus == Focus::Name);
    let name_inner = name_block.inner(top[0]);
    let name = if draft.name.is_empty() { placeholder(NAME_PLACEHOLDER) } else { Line::raw(draft.name.as_str()) };
    f.render_widget(Paragraph::new(name).block(name_block), top[0]);
    if app.focus == Focus::Name && app.store.selection().is_idle() {
        let x = name_inner.x.saturating_add(Span::raw(draft.name.as_str()).width() as u16);
        f.set_cursor(x.min(name_inner.right().saturating_sub(1)), name_inner.y);
    }

    let switch = if draft.done {
        Span::styled("[x] yes", Style::default().fg(Color::Green))
    } else {
        Span::styled("[ ] no", Style::default().fg(Color::Gray))
    };
    f.render_widget(Paragraph::new(Line::from(switch)).block(field_block("Done", app.focus == Focus::Done)), top[1]);

    let desc_block = field_block("Description", app.focus == Focus::Description);
    let desc_inner = desc_block.inner(rows[1]);
    let desc = if draft.description.is_empty() {
        Text::from(placeholder(DESCRIPTION_PLACEHOLDER))
    } else {
        Text::raw(draft.description.as_str())
    };
    f.render_widget(Paragraph::new(desc).block(desc_block).wrap(Wrap { trim: false }), rows[1]);
    if app.focus == Focus::Description && app.store.selection().is_idle() {
        let mut lines: Vec<&str> = draft.description.split('\n').collect();
        let last = lines.pop().unwrap_or_default();
        let y = desc_inner.y.saturating_add(lines.len() as u16);
        let x = desc_inner.x.saturating_add(Span::raw(last).width() as u16);
        if y < desc_inner.bottom() {
            f.set_cursor(x.min(desc_inner.right().saturating_sub(1)), y);
        }
    }

    let add_area = centered(9, 3, rows[2]);
    let add_style = if app.focus == Focus::Add {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };
    let add = Paragraph::new("Add")
        .alignment(Alignment::Center)
        .style(add_style)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Green)));
    f.render_widget(add, add_area);

    layout.name = top[0];
    layout.done = top[1];
    layout.description = rows[1];
    layout.add = add_area;
}

fn draw_list(f: &mut Frame, app: &mut App, area: Rect) -> Rect {
    let block = field_block("Todos", app.focus == Focus::List);
    let inner = block.inner(area);

    if app.store.todos().is_empty() {
        let empty = Paragraph::new(EMPTY_LIST)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
            .block(block);
        f.render_widget(empty, area);
        return inner;
    }

    let items: Vec<ListItem> = app.store.todos().iter().map(list_row).collect();
    let highlight = if app.focus == Focus::List {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::UNDERLINED)
    };
    let list = List::new(items).block(block).highlight_style(highlight);
    f.render_stateful_widget(list, area, &mut app.list_state);
    inner
}

fn list_row(todo: &Todo) -> ListItem<'_> {
    let mark = if todo.done { Color::Green } else { Color::DarkGray };
    let mut lines = vec![Line::from(vec![
        Span::styled("✔ ", Style::default().fg(mark)),
        Span::styled(todo.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
    ])];
    if todo.has_description() {
        lines.extend(todo.description.lines().map(|l| Line::from(vec![Span::raw("  "), Span::raw(l)])));
    }
    ListItem::new(Text::from(lines))
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let line = match app.toasts.latest() {
        Some(toast) => {
            let color = match toast.level { Level::Error => Color::Red, Level::Info => Color::Green };
            Line::styled(toast.message.as_str(), Style::default().fg(color).add_modifier(Modifier::BOLD))
        }
        None => placeholder(HELP),
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_dialog(f: &mut Frame, title: &str, toggle_label: &str) -> (Rect, [Rect; 3]) {
    let area = centered(48, 5, f.size());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title.to_string(), Style::default().add_modifier(Modifier::BOLD)));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(1, 3), Constraint::Ratio(1, 3)])
        .split(inner);
    let buttons = [
        ("Cancel", Color::Gray),
        (toggle_label, Color::Cyan),
        ("Delete", Color::Red),
    ];
    let mut rects = [Rect::default(); 3];
    for (i, (label, color)) in buttons.into_iter().enumerate() {
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));
        f.render_widget(button, cells[i]);
        rects[i] = cells[i];
    }
    (area, rects)
}

fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
