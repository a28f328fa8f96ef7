//! Failure boundary between storage and the GraphQL response.
//!
//! Storage errors are logged here with their cause and replaced by a fixed,
//! per-field message. The cause never reaches the client.

use crate::catalog_store::StorageError;
use thiserror::Error;
use tracing::error;

/// The field a traversal resolver is fetching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    Albums,
    Album,
    Artists,
    Artist,
    Track,
    AlbumsForArtist,
    TracksForArtist,
    TracksForAlbum,
    AlbumForTrack,
    ArtistForTrack,
}

impl FetchTarget {
    pub fn subject(&self) -> &'static str {
        match self {
            FetchTarget::Albums => "albums",
            FetchTarget::Album => "album",
            FetchTarget::Artists => "artists",
            FetchTarget::Artist => "artist",
            FetchTarget::Track => "track",
            FetchTarget::AlbumsForArtist => "albums for artist",
            FetchTarget::TracksForArtist => "tracks for artist",
            FetchTarget::TracksForAlbum => "tracks for album",
            FetchTarget::AlbumForTrack => "album for track",
            FetchTarget::ArtistForTrack => "artist for track",
        }
    }
}

/// What a resolver reports when its storage call failed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Failed to fetch {}", .target.subject())]
pub struct FetchError {
    pub target: FetchTarget,
}

pub trait FetchBoundary<T> {
    /// Log a storage failure and swap it for the target's fixed message.
    fn or_fetch_error(self, target: FetchTarget) -> Result<T, FetchError>;
}

impl<T> FetchBoundary<T> for Result<T, StorageError> {
    fn or_fetch_error(self, target: FetchTarget) -> Result<T, FetchError> {
        self.map_err(|err| {
            error!("Error fetching {}: {}", target.subject(), err);
            FetchError { target }
        })
    }
}
