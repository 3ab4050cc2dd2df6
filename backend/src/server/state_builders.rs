//! Builders for HTTP state and optional demo data.

use std::sync::Arc;

use tracing::info;

use userbase::domain::{
    DependentFields, Email, Error, MemberTypeFields, NewUser, PersonName, PostFields,
    ProfileFields, UserId, UserValidationError,
};
use userbase::inbound::http::state::HttpState;
use userbase::outbound::memory::{InMemoryDependentRepository, InMemoryUserRepository};

use super::ServerConfig;

/// Wire the domain services over a fresh in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    HttpState::from_repositories(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryDependentRepository::new()),
        config.max_write_attempts,
    )
}

fn demo_user(email: &str, first_name: &str, last_name: &str) -> Result<NewUser, Error> {
    let invalid = |err: UserValidationError| Error::internal(format!("invalid demo user: {err}"));
    Ok(NewUser {
        email: Email::new(email).map_err(invalid)?,
        first_name: PersonName::new(first_name).map_err(invalid)?,
        last_name: PersonName::new(last_name).map_err(invalid)?,
    })
}

fn demo_dependents(owner: UserId) -> [DependentFields; 3] {
    [
        ProfileFields {
            user_id: Some(owner),
            avatar: "https://example.com/ada.png".to_owned(),
            sex: "female".to_owned(),
            birthday: -4_952_822_400,
            country: "United Kingdom".to_owned(),
            street: "St James's Square".to_owned(),
            city: "London".to_owned(),
            member_type_id: None,
        }
        .into(),
        PostFields {
            user_id: Some(owner),
            title: "Notes on the Analytical Engine".to_owned(),
            content: "The engine weaves algebraic patterns.".to_owned(),
        }
        .into(),
        MemberTypeFields {
            user_id: Some(owner),
            discount: 5.0,
            month_posts_limit: 30,
        }
        .into(),
    ]
}

/// Create two users, subscribe the first to the second and attach one record
/// of each dependent kind to the first.
pub(super) async fn seed_demo_data(state: &HttpState) -> Result<(), Error> {
    let ada = state
        .users_command
        .create_user(demo_user("ada@example.com", "Ada", "Lovelace")?)
        .await?;
    let charles = state
        .users_command
        .create_user(demo_user("charles@example.com", "Charles", "Babbage")?)
        .await?;
    state
        .users_command
        .subscribe_to_user(ada.id(), *charles.id())
        .await?;
    for fields in demo_dependents(*ada.id()) {
        state.dependents_command.create_record(fields).await?;
    }
    info!(user_id = %ada.id(), target_id = %charles.id(), "seeded demo data");
    Ok(())
}
