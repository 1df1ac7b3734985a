//! Venue database operations

use fyyur_common::db::{Venue, VenueFields};
use fyyur_common::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::types::Json;
use sqlx::{Row, SqlitePool};
use tracing::debug;

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
                             website, genres, seeking_talent, seeking_description";

fn venue_from_row(row: &SqliteRow) -> std::result::Result<Venue, sqlx::Error> {
    let genres: Json<Vec<String>> = row.try_get("genres")?;

    Ok(Venue {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        address: row.try_get("address")?,
        phone: row.try_get("phone")?,
        image_link: row.try_get("image_link")?,
        facebook_link: row.try_get("facebook_link")?,
        website: row.try_get("website")?,
        genres: genres.0,
        seeking_talent: row.try_get("seeking_talent")?,
        seeking_description: row.try_get("seeking_description")?,
    })
}

/// Load all venues in id order
pub async fn list_venues(pool: &SqlitePool) -> Result<Vec<Venue>> {
    let rows = sqlx::query(&format!("SELECT {} FROM venue ORDER BY id", VENUE_COLUMNS))
        .fetch_all(pool)
        .await?;

    let venues = rows
        .iter()
        .map(venue_from_row)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(venues)
}

/// Load venue by id
pub async fn load_venue(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let row = sqlx::query(&format!("SELECT {} FROM venue WHERE id = ?", VENUE_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(venue_from_row(&row)?)),
        None => Ok(None),
    }
}

/// Insert a venue and return it with its assigned id
pub async fn insert_venue(pool: &SqlitePool, fields: &VenueFields) -> Result<Venue> {
    let mut tx = pool.begin().await?;

    let id = sqlx::query(
        r#"
        INSERT INTO venue (
            name, city, state, address, phone, image_link, facebook_link,
            website, genres, seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .bind(&fields.website)
    .bind(Json(&fields.genres))
    .bind(fields.seeking_talent)
    .bind(&fields.seeking_description)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    tx.commit().await?;
    debug!("Inserted venue {} ({})", id, fields.name);

    Ok(Venue::from_fields(id, fields.clone()))
}

/// Replace every mutable field of venue `id`
///
/// Returns `Ok(None)` when no such venue exists; the transaction is then
/// dropped and rolled back.
pub async fn update_venue(pool: &SqlitePool, id: i64, fields: &VenueFields) -> Result<Option<Venue>> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE venue SET
            name = ?, city = ?, state = ?, address = ?, phone = ?, image_link = ?,
            facebook_link = ?, website = ?, genres = ?, seeking_talent = ?,
            seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .bind(&fields.website)
    .bind(Json(&fields.genres))
    .bind(fields.seeking_talent)
    .bind(&fields.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    tx.commit().await?;
    Ok(Some(Venue::from_fields(id, fields.clone())))
}

/// Delete venue `id`; its shows go with it (ON DELETE CASCADE)
pub async fn delete_venue(pool: &SqlitePool, id: i64) -> Result<bool> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM venue WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}
