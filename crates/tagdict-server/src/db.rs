//! Database access for the API server.
//!
//! Every request opens its own connection, runs the two fixed queries on
//! it, and releases it. There is no pool and no reuse across requests.

use sqlx::postgres::PgRow;
use sqlx::{Connection, PgConnection, Row};
use tagdict_core::{ServerConfig, TagDictionary, TagRecord, ThresholdRule};

/// All tag rows, in table order. Counts are cast to `bigint` so the column
/// decodes as `i64` regardless of the stored integer width.
const TAG_QUERY: &str = r#"SELECT tag, trans, "jpTag", count::bigint AS count FROM "DanboruTags""#;

/// All threshold rows. The descending `minCount` order is part of the
/// payload contract: clients match a count against rules first-match-wins.
const THRESHOLD_QUERY: &str = r#"SELECT "minCount"::bigint AS "minCount", "maxCount"::bigint AS "maxCount", "colorCode", label, category FROM "TagThresholds" ORDER BY "minCount" DESC"#;

/// Fetch tags and thresholds over one freshly opened connection.
///
/// The connection is released on every exit path: dropped if connecting or
/// either query fails, closed gracefully once both reads have succeeded.
pub async fn fetch_dictionary(config: &ServerConfig) -> Result<TagDictionary, sqlx::Error> {
    let mut conn = PgConnection::connect(&config.connection_string()).await?;
    let tags = fetch_tags(&mut conn).await?;
    let thresholds = fetch_thresholds(&mut conn).await?;
    conn.close().await?;
    Ok(TagDictionary { tags, thresholds })
}

async fn fetch_tags(conn: &mut PgConnection) -> Result<Vec<TagRecord>, sqlx::Error> {
    let rows = sqlx::query(TAG_QUERY).fetch_all(&mut *conn).await?;
    rows.iter().map(tag_from_row).collect()
}

async fn fetch_thresholds(conn: &mut PgConnection) -> Result<Vec<ThresholdRule>, sqlx::Error> {
    let rows = sqlx::query(THRESHOLD_QUERY).fetch_all(&mut *conn).await?;
    rows.iter().map(threshold_from_row).collect()
}

fn tag_from_row(row: &PgRow) -> Result<TagRecord, sqlx::Error> {
    Ok(TagRecord {
        tag: row.try_get("tag")?,
        translation: row.try_get("trans")?,
        japanese: row.try_get("jpTag")?,
        count: row.try_get("count")?,
        // The live payload carries no group key.
        group: None,
    })
}

fn threshold_from_row(row: &PgRow) -> Result<ThresholdRule, sqlx::Error> {
    Ok(ThresholdRule {
        min_count: row.try_get("minCount")?,
        max_count: row.try_get("maxCount")?,
        color_code: row.try_get("colorCode")?,
        label: row.try_get("label")?,
        category: row.try_get("category")?,
    })
}
