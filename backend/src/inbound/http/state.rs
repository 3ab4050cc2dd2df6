//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on driving ports and remain testable without a store.

use std::sync::Arc;

use crate::domain::ports::{
    DependentRepository, DependentsCommand, DependentsQuery, UserRepository, UsersCommand,
    UsersQuery,
};
use crate::domain::{DependentRecordsService, UserAggregateService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub dependents: Arc<dyn DependentsQuery>,
    pub dependents_command: Arc<dyn DependentsCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        users: Arc<dyn UsersQuery>,
        users_command: Arc<dyn UsersCommand>,
        dependents: Arc<dyn DependentsQuery>,
        dependents_command: Arc<dyn DependentsCommand>,
    ) -> Self {
        Self {
            users,
            users_command,
            dependents,
            dependents_command,
        }
    }

    /// Wire the domain services on top of a pair of repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use userbase::inbound::http::state::HttpState;
    /// use userbase::outbound::memory::{InMemoryDependentRepository, InMemoryUserRepository};
    ///
    /// let state = HttpState::from_repositories(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     Arc::new(InMemoryDependentRepository::new()),
    ///     5,
    /// );
    /// let _users = state.users.clone();
    /// ```
    pub fn from_repositories<U, D>(
        users: Arc<U>,
        dependents: Arc<D>,
        max_write_attempts: u32,
    ) -> Self
    where
        U: UserRepository + 'static,
        D: DependentRepository + 'static,
    {
        let aggregate = Arc::new(
            UserAggregateService::new(users, Arc::clone(&dependents))
                .with_max_write_attempts(max_write_attempts),
        );
        let records = Arc::new(DependentRecordsService::new(dependents));
        Self {
            users: aggregate.clone(),
            users_command: aggregate,
            dependents: records.clone(),
            dependents_command: records,
        }
    }
}
