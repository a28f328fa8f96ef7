//! Row models for the Chinook catalog tables.
//!
//! Every row type reads its columns by name, so the mapping between stored
//! column names and struct fields lives here and nowhere else.

use rusqlite::Row;

// =============================================================================
// Artists
// =============================================================================

/// A row of the `artists` table.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtistRow {
    /// `ArtistId`
    pub artist_id: i64,
    /// `Name`, nullable in Chinook
    pub name: Option<String>,
}

impl ArtistRow {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(ArtistRow {
            artist_id: row.get("ArtistId")?,
            name: row.get("Name")?,
        })
    }
}

// =============================================================================
// Albums
// =============================================================================

/// A row of the `albums` table.
#[derive(Clone, Debug, PartialEq)]
pub struct AlbumRow {
    /// `AlbumId`
    pub album_id: i64,
    /// `Title`
    pub title: String,
    /// `ArtistId`
    pub artist_id: i64,
}

impl AlbumRow {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(AlbumRow {
            album_id: row.get("AlbumId")?,
            title: row.get("Title")?,
            artist_id: row.get("ArtistId")?,
        })
    }
}

// =============================================================================
// Tracks
// =============================================================================

/// A row of the `tracks` table.
///
/// `AlbumId`, `Composer` and `Bytes` are nullable in the Chinook schema.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackRow {
    /// `TrackId`
    pub track_id: i64,
    /// `Name`
    pub name: String,
    /// `AlbumId`
    pub album_id: Option<i64>,
    /// `Composer`
    pub composer: Option<String>,
    /// `Milliseconds`
    pub milliseconds: i64,
    /// `Bytes`
    pub bytes: Option<i64>,
    /// `UnitPrice`
    pub unit_price: f64,
}

impl TrackRow {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(TrackRow {
            track_id: row.get("TrackId")?,
            name: row.get("Name")?,
            album_id: row.get("AlbumId")?,
            composer: row.get("Composer")?,
            milliseconds: row.get("Milliseconds")?,
            bytes: row.get("Bytes")?,
            unit_price: row.get("UnitPrice")?,
        })
    }
}
