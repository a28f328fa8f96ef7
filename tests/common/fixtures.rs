//! Test fixture creation
//!
//! The catalog is read-only for the server, so fixtures are written with
//! direct SQL inserts into a Chinook-shaped database.

use anyhow::Result;
use rusqlite::Connection;
use std::path::PathBuf;
use tempfile::TempDir;

const CHINOOK_SCHEMA: &str = "
    CREATE TABLE artists (ArtistId INTEGER PRIMARY KEY NOT NULL, Name NVARCHAR(120));
    CREATE TABLE albums (
        AlbumId INTEGER PRIMARY KEY NOT NULL,
        Title NVARCHAR(160) NOT NULL,
        ArtistId INTEGER NOT NULL REFERENCES artists (ArtistId)
    );
    CREATE TABLE tracks (
        TrackId INTEGER PRIMARY KEY NOT NULL,
        Name NVARCHAR(200) NOT NULL,
        AlbumId INTEGER REFERENCES albums (AlbumId),
        MediaTypeId INTEGER NOT NULL,
        GenreId INTEGER,
        Composer NVARCHAR(220),
        Milliseconds INTEGER NOT NULL,
        Bytes INTEGER,
        UnitPrice NUMERIC(10,2) NOT NULL
    );";

const CHINOOK_DATA: &str = "
    INSERT INTO artists VALUES (1, 'AC/DC'), (2, 'Accept'), (3, 'Aerosmith');
    INSERT INTO albums VALUES
        (1, 'For Those About To Rock We Salute You', 1),
        (2, 'Balls to the Wall', 2),
        (3, 'Restless and Wild', 2),
        (4, 'Let There Be Rock', 1);
    INSERT INTO tracks VALUES
        (1, 'For Those About To Rock (We Salute You)', 1, 1, 1,
            'Angus Young, Malcolm Young, Brian Johnson', 343719, 11170334, 0.99),
        (2, 'Balls to the Wall', 2, 2, 1, NULL, 342562, 5510424, 0.99),
        (3, 'Fast As a Shark', 3, 2, 1,
            'F. Baltes, S. Kaufman, U. Dirkscneider & W. Hoffman', 230619, 3990994, 0.99),
        (6, 'Put The Finger On You', 1, 1, 1,
            'Angus Young, Malcolm Young, Brian Johnson', 205662, 6713451, 0.99),
        (15, 'Go Down', 4, 1, 1, 'AC/DC', 331180, 10847611, 0.99),
        (99, 'Loose Track', NULL, 1, 1, NULL, 1000, NULL, 0.99);";

/// Creates a temporary catalog with 3 artists, 4 albums and 6 tracks.
/// Returns (temp_dir, catalog_db_path)
pub fn create_test_catalog() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let db_path = dir.path().join("chinook.db");

    let conn = Connection::open(&db_path)?;
    conn.execute_batch(CHINOOK_SCHEMA)?;
    conn.execute_batch(CHINOOK_DATA)?;

    Ok((dir, db_path))
}
