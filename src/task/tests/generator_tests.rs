//! Display identifier derivation tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::rstest;

use crate::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{DisplayId, NewTask, Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
    services::DisplayIdGenerator,
};

mockall::mock! {
    pub Store {}

    #[async_trait]
    impl TaskStore for Store {
        async fn insert(&self, task: NewTask) -> TaskStoreResult<Task>;
        async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;
        async fn update(&self, task: &Task) -> TaskStoreResult<Task>;
        async fn max_id(&self) -> TaskStoreResult<Option<TaskId>>;
        async fn recent_incomplete(&self, limit: i64) -> TaskStoreResult<Vec<Task>>;
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_store_yields_tsk_1() {
    let mut store = MockStore::new();
    store.expect_max_id().returning(|| Ok(None));

    let generator = DisplayIdGenerator::new(Arc::new(store));
    let display_id = generator.generate().await.expect("generate should succeed");

    assert_eq!(display_id.as_str(), "TSK 1");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sequence_follows_highest_key() {
    let mut store = MockStore::new();
    store
        .expect_max_id()
        .returning(|| Ok(Some(TaskId::new(41))));

    let generator = DisplayIdGenerator::new(Arc::new(store));
    let display_id = generator.generate().await.expect("generate should succeed");

    assert_eq!(display_id.as_str(), "TSK 42");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_failure_propagates() {
    let mut store = MockStore::new();
    store.expect_max_id().returning(|| {
        Err(TaskStoreError::persistence(std::io::Error::other(
            "connection refused",
        )))
    });

    let generator = DisplayIdGenerator::new(Arc::new(store));
    let result = generator.generate().await;

    assert!(matches!(result, Err(TaskStoreError::Persistence(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_tasks_still_count_toward_sequence() {
    let clock = DefaultClock;
    let store = Arc::new(InMemoryTaskStore::new());

    for sequence in 1..=3 {
        let draft = NewTask::new(
            DisplayId::from_sequence(sequence),
            format!("Task {sequence}"),
            format!("Desc {sequence}"),
            &clock,
        )
        .expect("valid draft");
        let task = store.insert(draft).await.expect("insert should succeed");
        store
            .update(&task.into_completed())
            .await
            .expect("update should succeed");
    }

    let generator = DisplayIdGenerator::new(store);
    let display_id = generator.generate().await.expect("generate should succeed");

    assert_eq!(display_id.as_str(), "TSK 4");
}
