//! Storage access traits.
//!
//! A `CatalogConnector` hands out connections, a `CatalogConnection` runs one
//! fixed parameterized statement per call. Resolvers open a fresh connection
//! for every traversal they perform.

use super::models::{AlbumRow, ArtistRow, TrackRow};
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Any failure while opening a connection or running a statement.
///
/// Callers are expected to treat every variant the same way.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("catalog database not found: {0:?}")]
    MissingDatabase(PathBuf),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("catalog connection poisoned")]
    Poisoned,
}

/// Opens connections to the catalog database.
#[async_trait]
pub trait CatalogConnector: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn CatalogConnection>, StorageError>;
}

/// A single open connection to the catalog.
///
/// Point lookups return `Ok(None)` when nothing matches. Identifiers are bound
/// as given, with no numeric validation.
#[async_trait]
pub trait CatalogConnection: Send + Sync {
    // =========================================================================
    // Collections
    // =========================================================================

    /// All albums, in the store's natural order.
    async fn get_all_albums(&self) -> Result<Vec<AlbumRow>, StorageError>;

    /// All artists, in the store's natural order.
    async fn get_all_artists(&self) -> Result<Vec<ArtistRow>, StorageError>;

    // =========================================================================
    // Point lookups
    // =========================================================================

    async fn get_album_by_id(&self, id: &str) -> Result<Option<AlbumRow>, StorageError>;

    async fn get_artist_by_id(&self, id: &str) -> Result<Option<ArtistRow>, StorageError>;

    async fn get_track_by_id(&self, id: &str) -> Result<Option<TrackRow>, StorageError>;

    // =========================================================================
    // Relations
    // =========================================================================

    async fn get_albums_by_artist_id(&self, artist_id: i64)
        -> Result<Vec<AlbumRow>, StorageError>;

    /// Tracks whose album belongs to the given artist.
    async fn get_tracks_by_artist_id(&self, artist_id: i64)
        -> Result<Vec<TrackRow>, StorageError>;

    async fn get_tracks_by_album_id(&self, album_id: i64) -> Result<Vec<TrackRow>, StorageError>;

    /// The artist owning the track's album, if the track has one.
    async fn get_artist_by_track_id(
        &self,
        track_id: i64,
    ) -> Result<Option<ArtistRow>, StorageError>;
}
