// ABOUTME: Integration tests for the kanban task board
// ABOUTME: Covers creation, drag-and-drop moves, tag operations, field edits and filtering

use pretty_assertions::assert_eq;
use rstest::rstest;
use taskboard_tags::TagVocabulary;
use taskboard_tasks::{
    BoardError, Task, TaskBoard, TaskCreateInput, TaskField, TaskFilter, TaskPriority,
};

const BACKLOG: &str = "Бэклог";
const IN_PROGRESS: &str = "В работе";
const DONE: &str = "Готово";

/// Helper to create an empty board with the default columns
fn create_test_board() -> TaskBoard {
    TaskBoard::new(
        "project-1",
        vec![BACKLOG.into(), IN_PROGRESS.into(), DONE.into()],
        ["urgent", "feature", "bug"].into_iter().collect(),
        Vec::new(),
    )
}

fn add_task(board: &mut TaskBoard, title: &str) -> Task {
    board
        .create_task(TaskCreateInput {
            title: title.to_string(),
            ..Default::default()
        })
        .unwrap()
}

#[test]
fn test_create_task_in_first_column() {
    let mut board = create_test_board();
    let before = board.column_count(BACKLOG, TaskFilter::All);

    let task = add_task(&mut board, "Fix bug");

    assert_eq!(task.status, BACKLOG);
    assert_eq!(task.priority, TaskPriority::Medium);
    assert!(task.is_active);
    assert!(task.tags.is_empty());
    assert_eq!(board.column_count(BACKLOG, TaskFilter::All), before + 1);
    assert!(board.statuses().contains(&task.status));
}

#[test]
fn test_create_task_with_explicit_fields() {
    let mut board = create_test_board();
    let task = board
        .create_task(TaskCreateInput {
            title: "Ship".into(),
            description: "Release 1.0".into(),
            status: Some(IN_PROGRESS.into()),
            priority: TaskPriority::High,
            assignee: Some("alice".into()),
        })
        .unwrap();

    assert_eq!(task.status, IN_PROGRESS);
    assert_eq!(task.priority, TaskPriority::High);
    assert_eq!(task.assignee.as_deref(), Some("alice"));
    assert_eq!(task.description, "Release 1.0");
}

#[rstest]
#[case("")]
#[case("   ")]
fn test_create_task_with_empty_title_is_noop(#[case] title: &str) {
    let mut board = create_test_board();
    add_task(&mut board, "Existing");
    let before = board.tasks().to_vec();

    let result = board.create_task(TaskCreateInput {
        title: title.to_string(),
        ..Default::default()
    });

    assert_eq!(result, Err(BoardError::MissingFields("title")));
    assert_eq!(board.tasks(), before.as_slice());
}

#[test]
fn test_task_ids_are_unique() {
    let mut board = create_test_board();
    let a = add_task(&mut board, "a");
    let b = add_task(&mut board, "b");
    assert_ne!(a.id, b.id);
}

#[test]
fn test_drag_task_between_columns() {
    let mut board = create_test_board();
    let task = add_task(&mut board, "Fix bug");
    let backlog = board.column_count(BACKLOG, TaskFilter::All);
    let done = board.column_count(DONE, TaskFilter::All);

    let moved = board.move_task(&task.id, DONE).unwrap();
    assert_eq!(moved.status, DONE);

    assert_eq!(board.column_count(BACKLOG, TaskFilter::All), backlog - 1);
    assert_eq!(board.column_count(DONE, TaskFilter::All), done + 1);
}

#[test]
fn test_move_to_current_status_is_noop() {
    let mut board = create_test_board();
    let task = add_task(&mut board, "Fix bug");
    let before = board.tasks().to_vec();

    board.move_task(&task.id, BACKLOG).unwrap();
    assert_eq!(board.tasks(), before.as_slice());

    board.move_task(&task.id, DONE).unwrap();
    let after_first = board.tasks().to_vec();
    board.move_task(&task.id, DONE).unwrap();
    assert_eq!(board.tasks(), after_first.as_slice());
}

#[test]
fn test_move_to_unknown_column_fails() {
    let mut board = create_test_board();
    let task = add_task(&mut board, "Fix bug");

    let result = board.move_task(&task.id, "Archive").map(|t| t.clone());
    assert_eq!(result, Err(BoardError::UnknownStatus("Archive".into())));
    assert_eq!(board.task(&task.id).unwrap().status, BACKLOG);
}

#[test]
fn test_set_active_keeps_status() {
    let mut board = create_test_board();
    let task = add_task(&mut board, "Fix bug");
    board.move_task(&task.id, IN_PROGRESS).unwrap();

    let closed = board.set_active(&task.id, false).unwrap();
    assert!(!closed.is_active);
    assert_eq!(closed.status, IN_PROGRESS);

    let reopened = board.set_active(&task.id, true).unwrap();
    assert!(reopened.is_active);
}

#[test]
fn test_edit_fields() {
    let mut board = create_test_board();
    let task = add_task(&mut board, "Fix bug");

    board
        .edit_field(&task.id, TaskField::Description("Details".into()))
        .unwrap();
    board
        .edit_field(&task.id, TaskField::Priority(TaskPriority::Low))
        .unwrap();
    board
        .edit_field(&task.id, TaskField::Assignee(Some("user1".into())))
        .unwrap();
    board
        .edit_field(&task.id, TaskField::Status(DONE.into()))
        .unwrap();

    let edited = board.task(&task.id).unwrap();
    assert_eq!(edited.description, "Details");
    assert_eq!(edited.priority, TaskPriority::Low);
    assert_eq!(edited.assignee.as_deref(), Some("user1"));
    assert_eq!(edited.status, DONE);
    assert_eq!(edited.title, "Fix bug");

    board
        .edit_field(&task.id, TaskField::Assignee(None))
        .unwrap();
    assert_eq!(board.task(&task.id).unwrap().assignee, None);
}

#[test]
fn test_edit_status_validates_column() {
    let mut board = create_test_board();
    let task = add_task(&mut board, "Fix bug");

    let result = board
        .edit_field(&task.id, TaskField::Status("Nowhere".into()))
        .map(|t| t.clone());
    assert!(result.is_err());
}

#[test]
fn test_add_tag_grows_vocabulary() {
    let mut board = create_test_board();
    let task = add_task(&mut board, "Fix bug");

    let outcome = board.add_tag(&task.id, "  backend ").unwrap();
    assert!(outcome.vocabulary_grew);
    assert!(outcome.task_changed);
    assert_eq!(board.task(&task.id).unwrap().tags, vec!["backend".to_string()]);
    assert!(board.vocabulary().contains("backend"));
}

#[test]
fn test_add_existing_tag_is_idempotent() {
    let mut board = create_test_board();
    let task = add_task(&mut board, "Fix bug");

    let first = board.add_tag(&task.id, "urgent").unwrap();
    assert!(!first.vocabulary_grew);
    assert!(first.task_changed);

    let second = board.add_tag(&task.id, "urgent").unwrap();
    assert!(!second.vocabulary_grew);
    assert!(!second.task_changed);
    assert_eq!(board.task(&task.id).unwrap().tags.len(), 1);
}

#[test]
fn test_add_blank_tag_is_noop() {
    let mut board = create_test_board();
    let task = add_task(&mut board, "Fix bug");
    let vocabulary = board.vocabulary().clone();

    assert_eq!(
        board.add_tag(&task.id, "   "),
        Err(BoardError::MissingFields("tag"))
    );
    assert_eq!(board.vocabulary(), &vocabulary);
    assert!(board.task(&task.id).unwrap().tags.is_empty());
}

#[test]
fn test_add_then_remove_restores_tags_but_keeps_vocabulary() {
    let mut board = create_test_board();
    let task = add_task(&mut board, "Fix bug");
    let original_tags = board.task(&task.id).unwrap().tags.clone();

    board.add_tag(&task.id, "backend").unwrap();
    let grown = board.vocabulary().clone();
    assert_eq!(board.remove_tag(&task.id, "backend"), Ok(true));

    assert_eq!(board.task(&task.id).unwrap().tags, original_tags);
    assert_eq!(board.vocabulary(), &grown);
    assert!(board.vocabulary().contains("backend"));
}

#[rstest]
#[case("urgent")]
#[case("feature")]
fn test_toggle_tag_is_its_own_inverse(#[case] tag: &str) {
    let mut board = create_test_board();
    let task = add_task(&mut board, "Fix bug");
    board.add_tag(&task.id, "bug").unwrap();
    let original = board.task(&task.id).unwrap().tags.clone();
    let vocabulary = board.vocabulary().clone();

    assert_eq!(board.toggle_tag(&task.id, tag), Ok(true));
    assert_eq!(board.toggle_tag(&task.id, tag), Ok(false));

    assert_eq!(board.task(&task.id).unwrap().tags, original);
    assert_eq!(board.vocabulary(), &vocabulary);
}

#[test]
fn test_toggle_removes_present_tag() {
    let mut board = create_test_board();
    let task = add_task(&mut board, "Fix bug");
    board.add_tag(&task.id, "bug").unwrap();

    assert_eq!(board.toggle_tag(&task.id, "bug"), Ok(false));
    assert!(board.task(&task.id).unwrap().tags.is_empty());
}

#[test]
fn test_toggle_unknown_tag_fails_without_growing_vocabulary() {
    let mut board = create_test_board();
    let task = add_task(&mut board, "Fix bug");

    assert_eq!(
        board.toggle_tag(&task.id, "brand-new"),
        Err(BoardError::UnknownTag("brand-new".into()))
    );
    assert!(!board.vocabulary().contains("brand-new"));
}

#[test]
fn test_filter_partitions_by_active_flag() {
    let mut board = create_test_board();
    let a = add_task(&mut board, "a");
    add_task(&mut board, "b");
    let c = add_task(&mut board, "c");
    board.set_active(&a.id, false).unwrap();
    board.set_active(&c.id, false).unwrap();

    let all = board.filtered(TaskFilter::All);
    let active = board.filtered(TaskFilter::Active);
    let closed = board.filtered(TaskFilter::Closed);

    assert_eq!(all.len(), board.tasks().len());
    assert_eq!(active.len() + closed.len(), all.len());
    assert!(active.iter().all(|t| t.is_active));
    assert!(closed.iter().all(|t| !t.is_active));

    let titles: Vec<&str> = closed.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "c"]);
}

#[test]
fn test_columns_follow_status_order_and_insertion_order() {
    let mut board = create_test_board();
    let first = add_task(&mut board, "first");
    let second = add_task(&mut board, "second");
    let third = add_task(&mut board, "third");
    board.move_task(&second.id, DONE).unwrap();
    board.set_active(&third.id, false).unwrap();

    let columns = board.columns(TaskFilter::All);
    let statuses: Vec<&str> = columns.iter().map(|c| c.status).collect();
    assert_eq!(statuses, vec![BACKLOG, IN_PROGRESS, DONE]);

    let backlog: Vec<&str> = columns[0].tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(backlog, vec![first.id.as_str(), third.id.as_str()]);
    assert_eq!(columns[1].count(), 0);
    assert_eq!(columns[2].count(), 1);

    let active_columns = board.columns(TaskFilter::Active);
    assert_eq!(active_columns[0].count(), 1);
    // Filtering leaves the underlying tasks untouched
    assert_eq!(board.tasks().len(), 3);
}

#[test]
fn test_into_parts_returns_tasks_and_vocabulary() {
    let mut board = create_test_board();
    let task = add_task(&mut board, "Fix bug");
    board.add_tag(&task.id, "backend").unwrap();

    let (tasks, vocabulary) = board.into_parts();
    assert_eq!(tasks.len(), 1);
    let expected: TagVocabulary = ["urgent", "feature", "bug", "backend"].into_iter().collect();
    assert_eq!(vocabulary, expected);
}
