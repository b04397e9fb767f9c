//! The todo collection together with the transient form draft and the item
//! targeted by the confirmation dialog.
//!
//! All state lives on one thread. Every mutation is reported to subscribers so
//! a view can redraw only when something actually changed.

use std::fmt;

use crate::domain::{
    repository::TodoRepository,
    todo::{Draft, Todo, TodoId, ValidationError},
};

/// The item the confirmation dialog is open for, captured when it was picked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected { id: TodoId, name: String, done: bool },
}

impl Selection {
    pub fn id(&self) -> Option<TodoId> {
        match self {
            Selection::Idle => None,
            Selection::Selected { id, .. } => Some(*id),
        }
    }

    pub fn is_idle(&self) -> bool { matches!(self, Selection::Idle) }

    /// Label for the toggle action of the dialog.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Selection::Selected { done: true, .. } => "Incomplete",
            _ => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Collection,
    Draft,
    Selection,
}

type Listener = Box<dyn FnMut(Change)>;

pub struct TodoStore<R: TodoRepository> {
    repo: R,
    draft: Draft,
    selection: Selection,
    listeners: Vec<Listener>,
}

impl<R: TodoRepository> fmt::Debug for TodoStore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoStore")
            .field("todos", &self.repo.list().len())
            .field("draft", &self.draft)
            .field("selection", &self.selection)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<R: TodoRepository> TodoStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo, draft: Draft::default(), selection: Selection::Idle, listeners: Vec::new() }
    }

    pub fn todos(&self) -> &[Todo] { self.repo.list() }

    pub fn get(&self, id: TodoId) -> Option<&Todo> { self.repo.get(id) }

    pub fn draft(&self) -> &Draft { &self.draft }

    pub fn selection(&self) -> &Selection { &self.selection }

    /// Registers a callback run after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(Change) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, change: Change) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.emit(Change::Draft);
    }

    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
        self.emit(Change::Draft);
    }

    pub fn set_draft_done(&mut self, done: bool) {
        self.draft.done = done;
        self.emit(Change::Draft);
    }

    /// Applies an in-place edit to the draft, e.g. a single keystroke.
    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut Draft)) {
        edit(&mut self.draft);
        self.emit(Change::Draft);
    }

    /// Submits the current draft. On success the new item becomes the first
    /// element and the draft is reset; on failure nothing changes.
    pub fn add(&mut self) -> Result<TodoId, ValidationError> {
        if let Err(err) = self.draft.validate() {
            tracing::warn!(error = %err, "rejected draft");
            return Err(err);
        }
        let todo = Todo::from_draft(std::mem::take(&mut self.draft));
        let id = todo.id;
        tracing::info!(%id, name = %todo.name, "todo added");
        self.repo.prepend(todo);
        self.emit(Change::Collection);
        self.emit(Change::Draft);
        Ok(id)
    }

    /// Flips `done` on the matching item. Missing ids are ignored.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        if !self.repo.toggle(id) {
            tracing::debug!(%id, "toggle on missing todo ignored");
            return false;
        }
        tracing::info!(%id, "todo toggled");
        self.emit(Change::Collection);
        true
    }

    /// Deletes the matching item and drops the selection if it pointed at it.
    pub fn remove(&mut self, id: TodoId) -> bool {
        if !self.repo.remove(id) {
            tracing::debug!(%id, "remove on missing todo ignored");
            return false;
        }
        tracing::info!(%id, "todo removed");
        self.emit(Change::Collection);
        if self.selection.id() == Some(id) {
            self.set_selection(Selection::Idle);
        }
        true
    }

    /// Opens the dialog for `id`. Unknown ids leave the selection untouched.
    pub fn pick(&mut self, id: TodoId) -> bool {
        let Some(todo) = self.repo.get(id) else { return false };
        let selection = Selection::Selected { id, name: todo.name.clone(), done: todo.done };
        tracing::debug!(%id, "todo picked");
        self.set_selection(selection);
        true
    }

    pub fn dismiss(&mut self) {
        if self.selection.is_idle() { return; }
        tracing::debug!("dialog dismissed");
        self.set_selection(Selection::Idle);
    }

    pub fn confirm_toggle(&mut self) -> bool {
        let Some(id) = self.selection.id() else { return false };
        let toggled = self.toggle(id);
        self.set_selection(Selection::Idle);
        toggled
    }

    pub fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.selection.id() else { return false };
        let removed = self.remove(id);
        if !self.selection.is_idle() {
            self.set_selection(Selection::Idle);
        }
        removed
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
        self.emit(Change::Selection);
    }
}
