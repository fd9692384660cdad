//! Keyset-paged slug listing shared by every entity table

use crate::db::DbEngine;
use crate::errors::CatalogResult;
use crate::models::EntityKind;

/// Slug listing operations
pub struct SlugTable;

impl SlugTable {
    /// Fetch up to `limit` slugs of `kind` strictly after `after`, ascending
    pub async fn page(
        engine: &DbEngine,
        kind: EntityKind,
        after: Option<&str>,
        limit: u32,
    ) -> CatalogResult<Vec<String>> {
        let pool = engine.pool();

        // table name comes from a closed enum, never from user input
        let rows: Vec<(String,)> = match after {
            Some(cursor) => {
                let query = format!(
                    "SELECT slug FROM {} WHERE slug > ? ORDER BY slug LIMIT ?",
                    kind.table()
                );
                sqlx::query_as(&query)
                    .bind(cursor)
                    .bind(i64::from(limit))
                    .fetch_all(pool)
                    .await?
            }
            None => {
                let query = format!("SELECT slug FROM {} ORDER BY slug LIMIT ?", kind.table());
                sqlx::query_as(&query)
                    .bind(i64::from(limit))
                    .fetch_all(pool)
                    .await?
            }
        };

        Ok(rows.into_iter().map(|(slug,)| slug).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::seeded_engine;

    #[tokio::test]
    async fn test_page_continues_after_cursor() {
        let engine = seeded_engine().await;

        let first = SlugTable::page(&engine, EntityKind::Artist, None, 2).await;
        assert_eq!(first.unwrap(), vec!["aster", "bellwether"]);

        let rest = SlugTable::page(&engine, EntityKind::Artist, Some("bellwether"), 2)
            .await
            .unwrap();
        assert_eq!(rest, vec!["cobalt"]);
    }
}
