//! Artist database operations

use fyyur_common::db::{Artist, ArtistFields};
use fyyur_common::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::types::Json;
use sqlx::{Row, SqlitePool};
use tracing::debug;

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, image_link, facebook_link, \
                              website, genres, seeking_venue, seeking_description";

fn artist_from_row(row: &SqliteRow) -> std::result::Result<Artist, sqlx::Error> {
    let genres: Json<Vec<String>> = row.try_get("genres")?;

    Ok(Artist {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        phone: row.try_get("phone")?,
        image_link: row.try_get("image_link")?,
        facebook_link: row.try_get("facebook_link")?,
        website: row.try_get("website")?,
        genres: genres.0,
        seeking_venue: row.try_get("seeking_venue")?,
        seeking_description: row.try_get("seeking_description")?,
    })
}

/// Load all artists in id order
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query(&format!("SELECT {} FROM artist ORDER BY id", ARTIST_COLUMNS))
        .fetch_all(pool)
        .await?;

    let artists = rows
        .iter()
        .map(artist_from_row)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(artists)
}

/// Load artist by id
pub async fn load_artist(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let row = sqlx::query(&format!("SELECT {} FROM artist WHERE id = ?", ARTIST_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(artist_from_row(&row)?)),
        None => Ok(None),
    }
}

/// Insert an artist and return it with its assigned id
pub async fn insert_artist(pool: &SqlitePool, fields: &ArtistFields) -> Result<Artist> {
    let mut tx = pool.begin().await?;

    let id = sqlx::query(
        r#"
        INSERT INTO artist (
            name, city, state, phone, image_link, facebook_link,
            website, genres, seeking_venue, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.phone)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .bind(&fields.website)
    .bind(Json(&fields.genres))
    .bind(fields.seeking_venue)
    .bind(&fields.seeking_description)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    tx.commit().await?;
    debug!("Inserted artist {} ({})", id, fields.name);

    Ok(Artist::from_fields(id, fields.clone()))
}

/// Replace every mutable field of artist `id`
pub async fn update_artist(
    pool: &SqlitePool,
    id: i64,
    fields: &ArtistFields,
) -> Result<Option<Artist>> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE artist SET
            name = ?, city = ?, state = ?, phone = ?, image_link = ?,
            facebook_link = ?, website = ?, genres = ?, seeking_venue = ?,
            seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.phone)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .bind(&fields.website)
    .bind(Json(&fields.genres))
    .bind(fields.seeking_venue)
    .bind(&fields.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    tx.commit().await?;
    Ok(Some(Artist::from_fields(id, fields.clone())))
}

/// Delete artist `id`; its shows go with it (ON DELETE CASCADE)
pub async fn delete_artist(pool: &SqlitePool, id: i64) -> Result<bool> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM artist WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}
