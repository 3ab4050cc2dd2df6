//! HTTP inbound adapter exposing REST endpoints.

pub mod dependents;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register every `/api/v1` handler on a scope or app.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use userbase::inbound::http::configure_api;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(users::list_users)
        .service(users::create_user)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(users::subscribe_to_user)
        .service(users::unsubscribe_from_user)
        .service(dependents::create_profile)
        .service(dependents::list_profiles)
        .service(dependents::get_profile)
        .service(dependents::create_post)
        .service(dependents::list_posts)
        .service(dependents::get_post)
        .service(dependents::create_member_type)
        .service(dependents::list_member_types)
        .service(dependents::get_member_type);
}
