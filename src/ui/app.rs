//! Interaction state for the terminal front end: which control has focus,
//! where the list cursor is, and how key and mouse input map onto store
//! operations. Nothing here touches the terminal, so it can be driven from
//! tests with synthetic events.

use std::{cell::Cell, rc::Rc, time::{Duration, Instant}};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, widgets::ListState};

use crate::{
    application::{
        notifications::{Level, Notifications},
        todo_store::TodoStore,
    },
    domain::todo::TodoId,
    infrastructure::memory_repo::InMemoryTodoRepository,
};

use super::view;

pub type Store = TodoStore<InMemoryTodoRepository>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus { Name, Done, Description, Add, List }

impl Focus {
    const ORDER: [Focus; 5] = [Focus::Name, Focus::Done, Focus::Description, Focus::Add, Focus::List];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self { Self::ORDER[(self.index() + 1) % Self::ORDER.len()] }

    pub fn prev(self) -> Self { Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()] }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow { Continue, Quit }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction { Cancel, Toggle, Delete }

/// Screen regions from the last draw, used for mouse hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub name: Rect,
    pub done: Rect,
    pub description: Rect,
    pub add: Rect,
    /// Inner area of the list, excluding its border.
    pub list: Rect,
    pub dialog: Option<Rect>,
    pub dialog_buttons: [Rect; 3],
}

pub struct App {
    pub store: Store,
    pub toasts: Notifications,
    pub focus: Focus,
    pub list_state: ListState,
    pub layout: ScreenLayout,
    dirty: Rc<Cell<bool>>,
}

impl App {
    pub fn new(mut store: Store, toast_ttl: Duration) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        store.subscribe(move |_| flag.set(true));
        let mut app = Self {
            store,
            toasts: Notifications::new(toast_ttl),
            focus: Focus::Name,
            list_state: ListState::default(),
            layout: ScreenLayout::default(),
            dirty,
        };
        app.sync_cursor();
        app
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn take_dirty(&self) -> bool { self.dirty.replace(false) }

    pub fn mark_dirty(&self) { self.dirty.set(true); }

    pub fn tick(&mut self, now: Instant) {
        if self.toasts.prune(now) {
            self.mark_dirty();
        }
    }

    pub fn cursor_id(&self) -> Option<TodoId> {
        self.list_state.selected().and_then(|i| self.store.todos().get(i)).map(|t| t.id)
    }

    fn sync_cursor(&mut self) {
        let len = self.store.todos().len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            Some(_) => {}
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.store.todos().len();
        if len == 0 { return; }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.list_state.select(Some(next));
        self.mark_dirty();
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.mark_dirty();
        }
    }

    pub fn submit(&mut self) {
        match self.store.add() {
            Ok(_) => {
                self.list_state.select(Some(0));
                self.toasts.push(Level::Info, "Todo added");
            }
            Err(err) => self.toasts.push(Level::Error, err.to_string()),
        }
        self.mark_dirty();
    }

    pub fn pick_at_cursor(&mut self) {
        if let Some(id) = self.cursor_id() {
            self.store.pick(id);
        }
    }

    pub fn dialog_action(&mut self, action: DialogAction) {
        match action {
            DialogAction::Cancel => self.store.dismiss(),
            DialogAction::Toggle => {
                let message = match self.store.selection().toggle_label() {
                    "Incomplete" => "Marked incomplete",
                    _ => "Marked completed",
                };
                if self.store.confirm_toggle() {
                    self.toasts.push(Level::Info, message);
                }
            }
            DialogAction::Delete => {
                if self.store.confirm_delete() {
                    self.toasts.push(Level::Info, "Todo deleted");
                }
                self.sync_cursor();
            }
        }
        self.mark_dirty();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        // Only act on key presses; repeats and releases would duplicate input.
        if key.kind != KeyEventKind::Press { return Flow::Continue; }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') { return Flow::Quit; }

        if !self.store.selection().is_idle() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('c') => self.dialog_action(DialogAction::Cancel),
                KeyCode::Enter | KeyCode::Char('t') => self.dialog_action(DialogAction::Toggle),
                KeyCode::Delete | KeyCode::Char('d') => self.dialog_action(DialogAction::Delete),
                _ => {}
            }
            return Flow::Continue;
        }

        if ctrl && key.code == KeyCode::Char('s') {
            self.submit();
            return Flow::Continue;
        }
        match key.code {
            KeyCode::Tab => { self.set_focus(self.focus.next()); return Flow::Continue; }
            KeyCode::BackTab => { self.set_focus(self.focus.prev()); return Flow::Continue; }
            _ => {}
        }

        match self.focus {
            Focus::Name => match key.code {
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => self.store.edit_draft(|d| { d.name.pop(); }),
                KeyCode::Esc => self.set_focus(Focus::List),
                KeyCode::Char(c) if !ctrl => self.store.edit_draft(|d| d.name.push(c)),
                _ => {}
            },
            Focus::Description => match key.code {
                KeyCode::Enter => self.store.edit_draft(|d| d.description.push('\n')),
                KeyCode::Backspace => self.store.edit_draft(|d| { d.description.pop(); }),
                KeyCode::Esc => self.set_focus(Focus::List),
                KeyCode::Char(c) if !ctrl => self.store.edit_draft(|d| d.description.push(c)),
                _ => {}
            },
            Focus::Done => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let done = !self.store.draft().done;
                    self.store.set_draft_done(done);
                }
                KeyCode::Esc => self.set_focus(Focus::List),
                _ => {}
            },
            Focus::Add => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
                KeyCode::Esc => self.set_focus(Focus::List),
                _ => {}
            },
            Focus::List => match key.code {
                KeyCode::Char('q') => return Flow::Quit,
                KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
                KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
                KeyCode::Home => self.move_cursor(isize::MIN / 2),
                KeyCode::End => self.move_cursor(isize::MAX / 2),
                KeyCode::Enter | KeyCode::Char(' ') => self.pick_at_cursor(),
                _ => {}
            },
        }
        Flow::Continue
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Flow {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) { return Flow::Continue; }
        let (x, y) = (mouse.column, mouse.row);

        if let Some(dialog) = self.layout.dialog {
            if !contains(dialog, x, y) {
                self.dialog_action(DialogAction::Cancel);
            } else if let Some(i) = self.layout.dialog_buttons.iter().position(|r| contains(*r, x, y)) {
                let action = [DialogAction::Cancel, DialogAction::Toggle, DialogAction::Delete][i];
                self.dialog_action(action);
            }
            return Flow::Continue;
        }

        let layout = self.layout;
        if contains(layout.name, x, y) {
            self.set_focus(Focus::Name);
        } else if contains(layout.done, x, y) {
            self.set_focus(Focus::Done);
            let done = !self.store.draft().done;
            self.store.set_draft_done(done);
        } else if contains(layout.description, x, y) {
            self.set_focus(Focus::Description);
        } else if contains(layout.add, x, y) {
            self.set_focus(Focus::Add);
            self.submit();
        } else if contains(layout.list, x, y) {
            self.set_focus(Focus::List);
            if let Some(index) = self.row_at(y - layout.list.y) {
                self.list_state.select(Some(index));
                self.pick_at_cursor();
            }
        }
        Flow::Continue
    }

    /// Maps a line offset inside the list to the index of the row drawn there.
    fn row_at(&self, line: u16) -> Option<usize> {
        let mut top = 0u16;
        for (index, todo) in self.store.todos().iter().enumerate().skip(self.list_state.offset()) {
            let bottom = top.saturating_add(view::row_height(todo));
            if line < bottom { return Some(index); }
            top = bottom;
        }
        None
    }
}

fn contains(r: Rect, x: u16, y: u16) -> bool {
    x >= r.x && x < r.x.saturating_add(r.width) && y >= r.y && y < r.y.saturating_add(r.height)
}
