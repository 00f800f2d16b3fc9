//! Store contract tests against the in-memory adapter.

use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

use taskboard::task::adapters::memory::InMemoryTaskStore;
use taskboard::task::domain::{DisplayId, NewTask, PersistedTaskData, Task, TaskId};
use taskboard::task::ports::{TaskStore, TaskStoreError};

#[fixture]
fn store() -> InMemoryTaskStore {
    InMemoryTaskStore::new()
}

fn draft(sequence: i64) -> NewTask {
    NewTask::new(
        DisplayId::from_sequence(sequence),
        format!("Task {sequence}"),
        format!("Test {sequence}"),
        &DefaultClock,
    )
    .expect("valid draft")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_assigns_ascending_keys(store: InMemoryTaskStore) {
    for expected in 1..=3 {
        let task = store
            .insert(draft(expected))
            .await
            .expect("insert should succeed");
        assert_eq!(task.id(), TaskId::new(expected));
    }

    let max = store.max_id().await.expect("max_id should succeed");
    assert_eq!(max, Some(TaskId::new(3)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn max_id_is_none_when_empty(store: InMemoryTaskStore) {
    let max = store.max_id().await.expect("max_id should succeed");
    assert_eq!(max, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_none_for_unknown_key(store: InMemoryTaskStore) {
    let found = store
        .find_by_id(TaskId::new(7))
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recent_incomplete_filters_orders_and_caps(store: InMemoryTaskStore) {
    // Ten tasks, the even-keyed half completed.
    for sequence in 1..=10 {
        let task = store
            .insert(draft(sequence))
            .await
            .expect("insert should succeed");
        if sequence % 2 == 0 {
            store
                .update(&task.into_completed())
                .await
                .expect("update should succeed");
        }
    }

    let recent = store
        .recent_incomplete(5)
        .await
        .expect("query should succeed");

    assert_eq!(recent.len(), 5);
    assert!(recent.iter().all(|task| !task.is_completed()));
    let ids: Vec<i64> = recent.iter().map(|task| task.id().into_inner()).collect();
    assert_eq!(ids, vec![9, 7, 5, 3, 1]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recent_incomplete_returns_fewer_when_scarce(store: InMemoryTaskStore) {
    for sequence in 1..=3 {
        store
            .insert(draft(sequence))
            .await
            .expect("insert should succeed");
    }

    let recent = store
        .recent_incomplete(5)
        .await
        .expect("query should succeed");

    assert_eq!(recent.len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_unknown_task_errors(store: InMemoryTaskStore) {
    let phantom = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(42),
        display_id: DisplayId::from_sequence(42),
        title: "Phantom".to_owned(),
        description: "Never inserted".to_owned(),
        created_at: Utc
            .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp"),
        completed: true,
    });

    let result = store.update(&phantom).await;

    assert!(matches!(result, Err(TaskStoreError::NotFound(_))));
}
