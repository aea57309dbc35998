//! SeaORM entities. These are the schema definition of the store.

pub mod post;
