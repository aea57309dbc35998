//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod oauth;
mod repository;
mod store;

pub use oauth::{AccessToken, AuthError, OAuthClient};
pub use repository::PostRepository;
pub use store::{Store, UnitOfWork, in_unit_of_work};
