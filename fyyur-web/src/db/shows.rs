//! Show database operations

use chrono::{DateTime, Utc};
use fyyur_common::db::{NewShow, Show, ShowDetail};
use fyyur_common::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SHOW_DETAIL_SELECT: &str = r#"
    SELECT s.id, s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
           s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
           s.start_time
    FROM show s
    JOIN venue v ON v.id = s.venue_id
    JOIN artist a ON a.id = s.artist_id
"#;

fn show_detail_from_row(row: &SqliteRow) -> std::result::Result<ShowDetail, sqlx::Error> {
    Ok(ShowDetail {
        id: row.try_get("id")?,
        venue_id: row.try_get("venue_id")?,
        venue_name: row.try_get("venue_name")?,
        venue_image_link: row.try_get("venue_image_link")?,
        artist_id: row.try_get("artist_id")?,
        artist_name: row.try_get("artist_name")?,
        artist_image_link: row.try_get("artist_image_link")?,
        start_time: row.try_get::<DateTime<Utc>, _>("start_time")?,
    })
}

fn collect_details(rows: &[SqliteRow]) -> Result<Vec<ShowDetail>> {
    let details = rows
        .iter()
        .map(show_detail_from_row)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(details)
}

/// All shows with venue and artist names, ordered by start time
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowDetail>> {
    let rows = sqlx::query(&format!("{} ORDER BY s.start_time, s.id", SHOW_DETAIL_SELECT))
        .fetch_all(pool)
        .await?;
    collect_details(&rows)
}

/// Shows held at venue `venue_id`
pub async fn shows_for_venue(pool: &SqlitePool, venue_id: i64) -> Result<Vec<ShowDetail>> {
    let rows = sqlx::query(&format!(
        "{} WHERE s.venue_id = ? ORDER BY s.start_time, s.id",
        SHOW_DETAIL_SELECT
    ))
    .bind(venue_id)
    .fetch_all(pool)
    .await?;
    collect_details(&rows)
}

/// Shows played by artist `artist_id`
pub async fn shows_for_artist(pool: &SqlitePool, artist_id: i64) -> Result<Vec<ShowDetail>> {
    let rows = sqlx::query(&format!(
        "{} WHERE s.artist_id = ? ORDER BY s.start_time, s.id",
        SHOW_DETAIL_SELECT
    ))
    .bind(artist_id)
    .fetch_all(pool)
    .await?;
    collect_details(&rows)
}

/// Insert a show; the foreign keys reject unknown venue or artist ids
pub async fn insert_show(pool: &SqlitePool, show: &NewShow) -> Result<Show> {
    let mut tx = pool.begin().await?;

    let id = sqlx::query("INSERT INTO show (venue_id, artist_id, start_time) VALUES (?, ?, ?)")
        .bind(show.venue_id)
        .bind(show.artist_id)
        .bind(show.start_time)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

    tx.commit().await?;

    Ok(Show {
        id,
        venue_id: show.venue_id,
        artist_id: show.artist_id,
        start_time: show.start_time,
    })
}
