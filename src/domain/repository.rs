use super::todo::{Todo, TodoId};

/// Ordered storage for todo items. Order is display order, newest first.
pub trait TodoRepository {
    fn list(&self) -> &[Todo];
    fn get(&self, id: TodoId) -> Option<&Todo>;
    fn prepend(&mut self, todo: Todo);
    /// Flips `done` on the matching item. Returns false when nothing matched.
    fn toggle(&mut self, id: TodoId) -> bool;
    /// Returns false when nothing matched.
    fn remove(&mut self, id: TodoId) -> bool;
}
