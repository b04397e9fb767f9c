#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::super::todo_store::{Change, Selection, TodoStore};
    use crate::domain::todo::{Draft, Todo, TodoId, ValidationError};
    use crate::infrastructure::memory_repo::InMemoryTodoRepository;

    fn store_with(names: &[&str]) -> TodoStore<InMemoryTodoRepository> {
        let items = names.iter().map(|n| Todo::from_draft(Draft::named(*n))).collect();
        TodoStore::new(InMemoryTodoRepository::with_items(items))
    }

    fn names(store: &TodoStore<InMemoryTodoRepository>) -> Vec<String> {
        store.todos().iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn add_rejects_blank_names() {
        let mut store = store_with(&["A"]);
        let before = store.todos().to_vec();
        for blank in ["", " ", "   ", "\t\n", "\u{3000}"] {
            store.set_draft_name(blank);
            store.set_draft_description("kept");
            assert_eq!(store.add(), Err(ValidationError::NameRequired));
            assert_eq!(store.todos(), before.as_slice());
            assert_eq!(store.draft().description, "kept");
        }
    }

    #[test]
    fn add_prepends_with_fresh_id_and_resets_draft() {
        let mut store = store_with(&["A", "B"]);
        let existing: Vec<TodoId> = store.todos().iter().map(|t| t.id).collect();
        store.set_draft_name("D");
        store.set_draft_description("details");
        store.set_draft_done(true);

        let id = store.add().unwrap();

        assert_eq!(names(&store), ["D", "A", "B"]);
        let added = &store.todos()[0];
        assert_eq!(added.id, id);
        assert_eq!(added.description, "details");
        assert!(added.done);
        assert!(!existing.contains(&id));
        assert_eq!(store.draft(), &Draft::default());
    }

    #[test]
    fn add_keeps_name_untrimmed() {
        let mut store = store_with(&[]);
        store.set_draft_name("  spaced  ");
        store.add().unwrap();
        assert_eq!(store.todos()[0].name, "  spaced  ");
    }

    #[test]
    fn toggle_twice_restores_everything() {
        let mut store = store_with(&["A", "B", "C"]);
        let before = store.todos().to_vec();
        let id = before[1].id;

        assert!(store.toggle(id));
        assert!(store.get(id).unwrap().done);
        assert!(store.toggle(id));

        assert_eq!(store.todos(), before.as_slice());
    }

    #[test]
    fn toggle_missing_id_is_noop() {
        let mut store = store_with(&["A", "B"]);
        let before = store.todos().to_vec();
        assert!(!store.toggle(TodoId::new()));
        assert_eq!(store.todos(), before.as_slice());
    }

    #[test]
    fn remove_twice_equals_remove_once() {
        let mut store = store_with(&["A", "B"]);
        let id = store.todos()[0].id;
        assert!(store.remove(id));
        let after_once = store.todos().to_vec();
        assert!(!store.remove(id));
        assert_eq!(store.todos(), after_once.as_slice());
        assert_eq!(names(&store), ["B"]);
    }

    #[test]
    fn pick_captures_current_name_and_done() {
        let mut store = store_with(&["A"]);
        let id = store.todos()[0].id;
        store.toggle(id);

        assert!(store.pick(id));
        assert_eq!(store.selection(), &Selection::Selected { id, name: "A".into(), done: true });
        assert_eq!(store.selection().toggle_label(), "Incomplete");
    }

    #[test]
    fn pick_unknown_id_stays_idle() {
        let mut store = store_with(&["A"]);
        assert!(!store.pick(TodoId::new()));
        assert!(store.selection().is_idle());
    }

    #[test]
    fn dismiss_does_not_mutate() {
        let mut store = store_with(&["A"]);
        let before = store.todos().to_vec();
        store.pick(before[0].id);
        store.dismiss();
        assert!(store.selection().is_idle());
        assert_eq!(store.todos(), before.as_slice());
    }

    #[test]
    fn selection_clears_when_its_todo_is_removed() {
        let mut store = store_with(&["A", "B"]);
        let a = store.todos()[0].id;
        let b = store.todos()[1].id;

        store.pick(a);
        store.remove(b);
        assert_eq!(store.selection().id(), Some(a));

        store.remove(a);
        assert!(store.selection().is_idle());
    }

    #[test]
    fn confirm_actions_without_selection_do_nothing() {
        let mut store = store_with(&["A"]);
        let before = store.todos().to_vec();
        assert!(!store.confirm_toggle());
        assert!(!store.confirm_delete());
        assert_eq!(store.todos(), before.as_slice());
    }

    #[test]
    fn end_to_end_add_toggle_delete() {
        let mut store = store_with(&[]);
        store.set_draft_name("Buy milk");
        store.add().unwrap();
        assert_eq!(names(&store), ["Buy milk"]);
        assert!(!store.todos()[0].done);

        let id = store.todos()[0].id;
        store.pick(id);
        assert!(store.confirm_toggle());
        assert!(store.selection().is_idle());
        assert!(store.todos()[0].done);

        store.pick(id);
        assert!(store.confirm_delete());
        assert!(store.selection().is_idle());
        assert!(store.todos().is_empty());
    }

    #[test]
    fn subscribers_see_each_change() {
        let mut store = store_with(&["A"]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |change| sink.borrow_mut().push(change));

        store.set_draft_name("  ");
        let _ = store.add();
        store.set_draft_name("B");
        store.add().unwrap();
        let id = store.todos()[0].id;
        store.pick(id);
        store.confirm_delete();

        assert_eq!(
            *seen.borrow(),
            [
                Change::Draft,
                Change::Draft,
                Change::Collection,
                Change::Draft,
                Change::Selection,
                Change::Collection,
                Change::Selection,
            ]
        );
    }
}
