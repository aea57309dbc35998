//! Post storage: SeaORM-backed and in-memory stores.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod post_repo;
#[cfg(feature = "postgres")]
mod schema;
#[cfg(feature = "postgres")]
mod store;

pub use connections::DatabaseConfig;
pub use memory::{InMemoryPostRepository, InMemoryStore};

#[cfg(feature = "postgres")]
pub use connections::connect;
#[cfg(feature = "postgres")]
pub use post_repo::SeaOrmPostRepository;
#[cfg(feature = "postgres")]
pub use schema::create_schema;
#[cfg(feature = "postgres")]
pub use store::SeaOrmStore;
