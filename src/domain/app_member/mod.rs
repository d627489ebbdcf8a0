//! App membership aggregate
//!
//! A member row ties a user to an app with one or more app-level roles.
//! Those roles decide who may modify or delete the app.

pub mod model;
pub mod repository;

pub use model::{
    format_role_types, parse_role_types, AppMember, AppMemberDeletion, AppMemberRole,
    CreateAppMember, OPERATE_APP_ROLES,
};
pub use repository::AppMemberRepository;
