use taskboard_core::{RenderedItem, Task, TaskFilter, TaskId, TaskValidationError};

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::new(TaskId::new(1_700_000_000_000), "Buy milk").unwrap();
    task.toggle();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 1_700_000_000_000_u64);
    assert_eq!(json["text"], "Buy milk");
    assert_eq!(json["completed"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_trims_text_and_defaults_completed() {
    let value = serde_json::json!({ "id": 3, "text": "  Walk dog  " });
    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.text(), "Walk dog");
    assert!(!task.completed);
}

#[test]
fn deserialize_rejects_blank_text() {
    let value = serde_json::json!({ "id": 3, "text": "   ", "completed": false });
    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string().contains(&TaskValidationError::EmptyText.to_string()),
        "unexpected error: {err}"
    );
}

#[test]
fn filter_serializes_as_control_value() {
    for filter in TaskFilter::CONTROLS {
        let json = serde_json::to_value(filter).unwrap();
        assert_eq!(json, filter.as_str());
        assert_eq!(TaskFilter::from_control_value(filter.as_str()), filter);
    }
}

#[test]
fn rendered_item_copies_task_display_fields() {
    let mut task = Task::new(TaskId::new(9), "ship it").unwrap();
    task.toggle();

    let item = RenderedItem::from(&task);
    assert_eq!(item.id, TaskId::new(9));
    assert_eq!(item.text, "ship it");
    assert!(item.completed);
}
