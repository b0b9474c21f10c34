//! Domain layer - Core entities, validation and store contracts

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{
    CreateUserParams, NewUser, PasswordHasher, UpdateUserParams, User, UserId, UserStore,
};
