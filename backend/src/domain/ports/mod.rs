//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters;
//! driving ports (`*Query`, `*Command`) are implemented by domain services
//! and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod dependent_records;
mod dependent_repository;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use dependent_records::{MockDependentsCommand, MockDependentsQuery};
pub use dependent_records::{DependentsCommand, DependentsQuery};
#[cfg(test)]
pub use dependent_repository::MockDependentRepository;
pub use dependent_repository::{
    DependentRepository, DependentRepositoryError, FixtureDependentRepository,
};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{
    FixtureUserRepository, INITIAL_REVISION, StoredUser, UserRepository, UserRepositoryError,
};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
