//! User domain
//!
//! This module provides the user entity, the request payloads that create and
//! update it, and the store trait that persists it.

mod entity;
mod params;
mod password;
mod store;

pub use entity::{NewUser, User, UserId};
pub use params::{CreateUserParams, UpdateUserParams, ValidationErrors};
pub use password::PasswordHasher;
pub use store::UserStore;

#[cfg(test)]
pub use password::testing::ReversingHasher;
#[cfg(test)]
pub use store::MockUserStore;
