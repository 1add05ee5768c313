use sea_orm::*;
use tracing::info;

use crate::entity::category;

/// Categories the client UI ships icons for.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Seed the `category` table with the default categories when it is empty.
///
/// Categories are read-only through the API, so an empty table would leave
/// the service unable to accept any question.
pub async fn seed_categories(db: &DatabaseConnection) -> Result<u64, DbErr> {
    let existing = category::Entity::find().count(db).await?;
    if existing > 0 {
        return Ok(0);
    }

    let models = DEFAULT_CATEGORIES.iter().map(|&kind| category::ActiveModel {
        kind: Set(kind.to_string()),
        ..Default::default()
    });
    category::Entity::insert_many(models)
        .exec_without_returning(db)
        .await?;

    let inserted = DEFAULT_CATEGORIES.len() as u64;
    info!("Seeded {} categories", inserted);
    Ok(inserted)
}
