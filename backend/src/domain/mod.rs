//! Domain primitives, aggregates and services.
//!
//! Purpose: define the user aggregate, the records that hang off it, and the
//! services enforcing their lifecycle rules. Nothing here depends on HTTP or
//! on a particular store; adapters talk to the domain through [`ports`].
//!
//! Public surface:
//! - `User`, `UserId`, `NewUser`, `UserChanges`: the user aggregate.
//! - `DependentRecord` and friends: profiles, posts and member types.
//! - `UserAggregateService`: cascade delete and subscription maintenance.
//! - `DependentRecordsService`: create/read for dependent records.
//! - `Error`, `ErrorCode`, `TraceId`: cross-cutting error and correlation.

pub mod dependent_records_service;
pub mod dependents;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_aggregate_service;

pub use self::dependent_records_service::DependentRecordsService;
pub use self::dependents::{
    DependentFields, DependentKind, DependentRecord, MemberTypeFields, PostFields, ProfileFields,
    RecordId,
};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    Email, NewUser, PersonName, User, UserChanges, UserId, UserValidationError,
};
pub use self::user_aggregate_service::{DEFAULT_MAX_WRITE_ATTEMPTS, UserAggregateService};
