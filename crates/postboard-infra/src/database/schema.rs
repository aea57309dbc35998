use sea_orm::{ConnectionTrait, DbConn, DbErr, Schema};

use super::entity::post;

/// Create the `posts` table from its entity definition if it is missing.
///
/// Existing tables are left as they are.
pub async fn create_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut create = Schema::new(backend).create_table_from_entity(post::Entity);
    create.if_not_exists();

    db.execute(backend.build(&create)).await?;
    tracing::info!("Schema ready (table: posts)");

    Ok(())
}
