//! # Postboard Core
//!
//! The domain layer of the Postboard backend.
//! This crate contains the post entity, the ports infrastructure must
//! implement, and the application service. It has no database or HTTP
//! dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::RepoError;
pub use services::PostService;
