//! Concurrent subscription writes over the in-memory store.
//!
//! The wrapped repository holds the first two reads at a barrier so both
//! writers see the same revision. One update then loses the revision check
//! and the service has to re-read and retry.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Barrier;

use userbase::domain::ports::{StoredUser, UserRepository, UserRepositoryError, UsersCommand};
use userbase::domain::{Email, NewUser, PersonName, User, UserAggregateService, UserId};
use userbase::outbound::memory::{InMemoryDependentRepository, InMemoryUserRepository};

struct InterleavedReads {
    inner: InMemoryUserRepository,
    barrier: Barrier,
    reads: AtomicUsize,
    held_reads: usize,
    conflicts: AtomicUsize,
}

impl InterleavedReads {
    fn new(inner: InMemoryUserRepository, held_reads: usize) -> Self {
        Self {
            inner,
            barrier: Barrier::new(held_reads),
            reads: AtomicUsize::new(0),
            held_reads,
            conflicts: AtomicUsize::new(0),
        }
    }

    fn conflicts(&self) -> usize {
        self.conflicts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for InterleavedReads {
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        self.inner.list().await
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<StoredUser>, UserRepositoryError> {
        let stored = self.inner.find_by_id(id).await?;
        if self.reads.fetch_add(1, Ordering::SeqCst) < self.held_reads {
            self.barrier.wait().await;
        }
        Ok(stored)
    }

    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        self.inner.insert(user).await
    }

    async fn update(
        &self,
        user: &User,
        expected_revision: u32,
    ) -> Result<u32, UserRepositoryError> {
        let result = self.inner.update(user, expected_revision).await;
        if matches!(result, Err(UserRepositoryError::RevisionMismatch { .. })) {
            self.conflicts.fetch_add(1, Ordering::SeqCst);
        }
        result
    }

    async fn delete(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        self.inner.delete(id).await
    }
}

fn person(email: &str) -> User {
    User::register(
        UserId::random(),
        NewUser {
            email: Email::new(email).expect("email"),
            first_name: PersonName::new("Test").expect("first name"),
            last_name: PersonName::new("User").expect("last name"),
        },
    )
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn racing_subscribes_retry_and_both_land() {
    let subscriber = person("a@example.com");
    let first_target = UserId::random();
    let second_target = UserId::random();
    let store = InMemoryUserRepository::new();
    store.insert(&subscriber).await.expect("seed subscriber");

    let users = Arc::new(InterleavedReads::new(store, 2));
    let service = Arc::new(
        UserAggregateService::new(
            Arc::clone(&users),
            Arc::new(InMemoryDependentRepository::new()),
        )
        .with_max_write_attempts(5),
    );

    let tasks = [first_target, second_target].map(|target| {
        let service = Arc::clone(&service);
        let id = *subscriber.id();
        tokio::spawn(async move { service.subscribe_to_user(&id, target).await })
    });
    for task in tasks {
        task.await.expect("task joins").expect("subscribe succeeds");
    }

    let stored = users
        .find_by_id(subscriber.id())
        .await
        .expect("lookup")
        .expect("subscriber stored");
    let mut subscribed = stored.user.subscribed_to_user_ids().to_vec();
    subscribed.sort();
    let mut expected = vec![first_target, second_target];
    expected.sort();
    assert_eq!(subscribed, expected);
    assert!(users.conflicts() >= 1, "one writer should have retried");
}
