use proptest::prelude::*;
use taskboard_core::{filter_tasks_by_status, TaskFilter, TaskId, TaskStore};

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(usize),
    Delete(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[ a-z]{0,6}".prop_map(Op::Add),
        (0usize..8).prop_map(Op::Toggle),
        (0usize..8).prop_map(Op::Delete),
    ]
}

fn apply(store: &mut TaskStore, op: &Op) {
    match op {
        Op::Add(text) => {
            store.add(text);
        }
        Op::Toggle(index) => {
            if let Some(id) = store.tasks().get(*index).map(|task| task.id) {
                store.toggle(id);
            }
        }
        Op::Delete(index) => {
            if let Some(id) = store.tasks().get(*index).map(|task| task.id) {
                store.delete(id);
            }
        }
    }
}

fn ids(tasks: Vec<&taskboard_core::Task>) -> Vec<TaskId> {
    tasks.into_iter().map(|task| task.id).collect()
}

proptest! {
    #[test]
    fn filters_partition_the_collection_in_order(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut store = TaskStore::new();
        for op in &ops {
            apply(&mut store, op);
        }

        let all = ids(filter_tasks_by_status(store.tasks(), TaskFilter::All));
        let active = ids(filter_tasks_by_status(store.tasks(), TaskFilter::Active));
        let completed = ids(filter_tasks_by_status(store.tasks(), TaskFilter::Completed));

        prop_assert_eq!(all.len(), store.len());
        prop_assert_eq!(active.len() + completed.len(), all.len());
        prop_assert!(active.iter().all(|id| !completed.contains(id)));

        let mut merged = active.clone();
        merged.extend(completed.iter().copied());
        merged.sort();
        prop_assert_eq!(&merged, &all);
        prop_assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(active.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(completed.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn stored_text_is_never_blank(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut store = TaskStore::new();
        for op in &ops {
            apply(&mut store, op);
        }
        prop_assert!(store.tasks().iter().all(|task| !task.text().trim().is_empty()));
        prop_assert_eq!(store.is_empty_state_visible(), store.is_empty());
    }
}
