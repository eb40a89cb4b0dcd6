use taskboard_core::{filter_tasks_by_status, TaskFilter, TaskStore};

fn texts(store: &TaskStore, filter: TaskFilter) -> Vec<String> {
    filter_tasks_by_status(store.tasks(), filter)
        .into_iter()
        .map(|task| task.text().to_string())
        .collect()
}

#[test]
fn add_keeps_insertion_order_and_skips_blank_input() {
    let mut store = TaskStore::new();
    store.add("Buy milk").unwrap();
    assert_eq!(store.add("  "), None);
    store.add("Walk dog").unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(texts(&store, TaskFilter::All), vec!["Buy milk", "Walk dog"]);
    assert!(store.tasks().iter().all(|task| !task.completed));
}

#[test]
fn ids_are_unique_and_increasing() {
    let mut store = TaskStore::new();
    let ids = (0..50)
        .map(|n| store.add(&format!("task {n}")).unwrap())
        .collect::<Vec<_>>();

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn toggle_twice_restores_original_state() {
    let mut store = TaskStore::new();
    let id = store.add("flip").unwrap();

    assert_eq!(store.toggle(id), Some(true));
    assert_eq!(store.toggle(id), Some(false));
    assert!(!store.get(id).unwrap().completed);
}

#[test]
fn delete_removes_only_the_matching_task() {
    let mut store = TaskStore::new();
    store.add("a").unwrap();
    let b = store.add("b").unwrap();
    store.add("c").unwrap();

    let removed = store.delete(b).unwrap();
    assert_eq!(removed.text(), "b");
    assert_eq!(texts(&store, TaskFilter::All), vec!["a", "c"]);
    assert!(store.delete(b).is_none());
}

#[test]
fn active_and_completed_partition_the_collection() {
    let mut store = TaskStore::new();
    let ids = ["a", "b", "c", "d"]
        .iter()
        .map(|text| store.add(text).unwrap())
        .collect::<Vec<_>>();
    store.toggle(ids[1]);
    store.toggle(ids[3]);

    assert_eq!(texts(&store, TaskFilter::All), vec!["a", "b", "c", "d"]);
    assert_eq!(texts(&store, TaskFilter::Active), vec!["a", "c"]);
    assert_eq!(texts(&store, TaskFilter::Completed), vec!["b", "d"]);
}

#[test]
fn filter_selection_does_not_change_stored_tasks() {
    let mut store = TaskStore::new();
    let id = store.add("x").unwrap();
    store.toggle(id);
    store.set_filter(TaskFilter::Active);

    assert_eq!(store.current_filter(), TaskFilter::Active);
    assert!(store.visible_tasks().is_empty());
    assert_eq!(store.len(), 1);
    assert!(!store.is_empty_state_visible());
}
