//! GraphQL object types.
//!
//! Scalar fields are projections of the loaded row, named explicitly per
//! field. Relation fields open a connection and run exactly one lookup keyed
//! by the parent's identifier.

use super::context::CatalogContext;
use super::error::{FetchBoundary, FetchTarget};
use crate::catalog_store::{AlbumRow, ArtistRow, TrackRow};
use async_graphql::{Context, Object, Result, ID};

// =============================================================================
// Artist
// =============================================================================

pub struct Artist(pub(crate) ArtistRow);

#[Object]
impl Artist {
    // ArtistId
    async fn id(&self) -> ID {
        ID::from(self.0.artist_id.to_string())
    }

    // Name, empty when unknown.
    async fn name(&self) -> &str {
        self.0.name.as_deref().unwrap_or_default()
    }

    async fn albums(&self, ctx: &Context<'_>) -> Result<Vec<Album>> {
        let catalog = ctx.data::<CatalogContext>()?;
        let target = FetchTarget::AlbumsForArtist;
        let conn = catalog.connect(target).await?;
        let rows = conn
            .get_albums_by_artist_id(self.0.artist_id)
            .await
            .or_fetch_error(target)?;
        Ok(rows.into_iter().map(Album).collect())
    }

    /// Every track on every album by this artist.
    async fn tracks(&self, ctx: &Context<'_>) -> Result<Vec<Track>> {
        let catalog = ctx.data::<CatalogContext>()?;
        let target = FetchTarget::TracksForArtist;
        let conn = catalog.connect(target).await?;
        let rows = conn
            .get_tracks_by_artist_id(self.0.artist_id)
            .await
            .or_fetch_error(target)?;
        Ok(rows.into_iter().map(Track).collect())
    }
}

// =============================================================================
// Album
// =============================================================================

pub struct Album(pub(crate) AlbumRow);

#[Object]
impl Album {
    // AlbumId
    async fn id(&self) -> ID {
        ID::from(self.0.album_id.to_string())
    }

    // Title
    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn tracks(&self, ctx: &Context<'_>) -> Result<Vec<Track>> {
        let catalog = ctx.data::<CatalogContext>()?;
        let target = FetchTarget::TracksForAlbum;
        let conn = catalog.connect(target).await?;
        let rows = conn
            .get_tracks_by_album_id(self.0.album_id)
            .await
            .or_fetch_error(target)?;
        Ok(rows.into_iter().map(Track).collect())
    }
}

// =============================================================================
// Track
// =============================================================================

pub struct Track(pub(crate) TrackRow);

#[Object]
impl Track {
    // TrackId
    async fn id(&self) -> ID {
        ID::from(self.0.track_id.to_string())
    }

    // Name
    async fn name(&self) -> &str {
        &self.0.name
    }

    // Composer, empty when unknown.
    async fn composer(&self) -> &str {
        self.0.composer.as_deref().unwrap_or_default()
    }

    // Milliseconds
    async fn milliseconds(&self) -> i64 {
        self.0.milliseconds
    }

    // Bytes, zero when unknown.
    async fn bytes(&self) -> i64 {
        self.0.bytes.unwrap_or_default()
    }

    // UnitPrice
    async fn price(&self) -> f64 {
        self.0.unit_price
    }

    /// Null for tracks without an album.
    async fn album(&self, ctx: &Context<'_>) -> Result<Option<Album>> {
        let Some(album_id) = self.0.album_id else {
            return Ok(None);
        };

        let catalog = ctx.data::<CatalogContext>()?;
        let target = FetchTarget::AlbumForTrack;
        let conn = catalog.connect(target).await?;
        let row = conn
            .get_album_by_id(&album_id.to_string())
            .await
            .or_fetch_error(target)?;
        Ok(row.map(Album))
    }

    /// The artist of the track's album, null for tracks without an album.
    async fn artist(&self, ctx: &Context<'_>) -> Result<Option<Artist>> {
        let catalog = ctx.data::<CatalogContext>()?;
        let target = FetchTarget::ArtistForTrack;
        let conn = catalog.connect(target).await?;
        let row = conn
            .get_artist_by_track_id(self.0.track_id)
            .await
            .or_fetch_error(target)?;
        Ok(row.map(Artist))
    }
}
