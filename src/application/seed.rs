use crate::domain::todo::{Draft, Todo};

/// Demo items shown on a fresh start: `Todo 0`, `Todo 1`, ... with a
/// description repeated once per index and every third item already done.
pub fn sample_todos(count: usize) -> Vec<Todo> {
    (0..count)
        .map(|i| {
            let name = format!("Todo {i}");
            let description = format!("Description {name} ").repeat(i);
            Todo::from_draft(Draft { name, description, done: i % 3 == 0 })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_requested_count_in_index_order() {
        let todos = sample_todos(4);
        let names: Vec<&str> = todos.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Todo 0", "Todo 1", "Todo 2", "Todo 3"]);
        assert!(todos[0].description.is_empty());
        assert_eq!(todos[2].description, "Description Todo 2 Description Todo 2 ");
        let done: Vec<bool> = todos.iter().map(|t| t.done).collect();
        assert_eq!(done, [true, false, false, true]);
    }

    #[test]
    fn zero_means_empty() {
        assert!(sample_todos(0).is_empty());
    }
}
