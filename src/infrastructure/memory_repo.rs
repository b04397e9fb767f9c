use crate::domain::{
    repository::TodoRepository,
    todo::{Todo, TodoId},
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    items: Vec<Todo>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self { Self::default() }

    /// Starts from `items` in the given display order.
    pub fn with_items(items: Vec<Todo>) -> Self { Self { items } }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn list(&self) -> &[Todo] { &self.items }

    fn get(&self, id: TodoId) -> Option<&Todo> { self.items.iter().find(|t| t.id == id) }

    fn prepend(&mut self, todo: Todo) { self.items.insert(0, todo); }

    fn toggle(&mut self, id: TodoId) -> bool {
        let Some(todo) = self.items.iter_mut().find(|t| t.id == id) else { return false };
        todo.done = !todo.done;
        true
    }

    fn remove(&mut self, id: TodoId) -> bool {
        let Some(idx) = self.position(id) else { return false };
        self.items.remove(idx);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::todo::Draft;

    fn todo(name: &str) -> Todo { Todo::from_draft(Draft::named(name)) }

    #[test]
    fn prepend_puts_newest_first() {
        let mut repo = InMemoryTodoRepository::new();
        repo.prepend(todo("A"));
        repo.prepend(todo("B"));
        let names: Vec<&str> = repo.list().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn toggle_and_remove_report_misses() {
        let mut repo = InMemoryTodoRepository::with_items(vec![todo("A")]);
        let missing = TodoId::new();
        assert!(!repo.toggle(missing));
        assert!(!repo.remove(missing));
        assert_eq!(repo.list().len(), 1);

        let id = repo.list()[0].id;
        assert!(repo.toggle(id));
        assert!(repo.get(id).unwrap().done);
        assert!(repo.remove(id));
        assert!(repo.get(id).is_none());
    }
}
