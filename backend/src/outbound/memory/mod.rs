//! In-memory collection store.
//!
//! Backs the driven ports with process-local collections guarded by
//! `tokio::sync::RwLock`. Every port call takes the lock once, so single
//! record operations are atomic; nothing spans calls. Data is lost on
//! restart.

mod dependent_repository;
mod user_repository;

pub use dependent_repository::InMemoryDependentRepository;
pub use user_repository::InMemoryUserRepository;
