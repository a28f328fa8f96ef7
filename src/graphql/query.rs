use super::context::CatalogContext;
use super::error::{FetchBoundary, FetchTarget};
use super::types::{Album, Artist, Track};
use async_graphql::{Context, Object, Result, ID};

pub struct QueryRoot;

/// An absent or empty search argument means "no filter".
fn search_term(arg: Option<&str>) -> Option<&str> {
    arg.filter(|s| !s.is_empty())
}

#[Object]
impl QueryRoot {
    /// All albums, or those whose title fuzzy-matches `title`.
    async fn albums(&self, ctx: &Context<'_>, title: Option<String>) -> Result<Vec<Album>> {
        let catalog = ctx.data::<CatalogContext>()?;
        let target = FetchTarget::Albums;
        let conn = catalog.connect(target).await?;
        let rows = conn.get_all_albums().await.or_fetch_error(target)?;

        let rows = match search_term(title.as_deref()) {
            Some(title) => catalog.fuzzy_filter(title, rows, |album| album.title.as_str()),
            None => rows,
        };
        Ok(rows.into_iter().map(Album).collect())
    }

    async fn album(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Album>> {
        let catalog = ctx.data::<CatalogContext>()?;
        let target = FetchTarget::Album;
        let conn = catalog.connect(target).await?;
        let row = conn.get_album_by_id(&id).await.or_fetch_error(target)?;
        Ok(row.map(Album))
    }

    /// All artists, or those whose name fuzzy-matches `name`.
    async fn artists(&self, ctx: &Context<'_>, name: Option<String>) -> Result<Vec<Artist>> {
        let catalog = ctx.data::<CatalogContext>()?;
        let target = FetchTarget::Artists;
        let conn = catalog.connect(target).await?;
        let rows = conn.get_all_artists().await.or_fetch_error(target)?;

        let rows = match search_term(name.as_deref()) {
            Some(name) => catalog.fuzzy_filter(name, rows, |artist| {
                artist.name.as_deref().unwrap_or_default()
            }),
            None => rows,
        };
        Ok(rows.into_iter().map(Artist).collect())
    }

    async fn artist(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Artist>> {
        let catalog = ctx.data::<CatalogContext>()?;
        let target = FetchTarget::Artist;
        let conn = catalog.connect(target).await?;
        let row = conn.get_artist_by_id(&id).await.or_fetch_error(target)?;
        Ok(row.map(Artist))
    }

    async fn track(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Track>> {
        let catalog = ctx.data::<CatalogContext>()?;
        let target = FetchTarget::Track;
        let conn = catalog.connect(target).await?;
        let row = conn.get_track_by_id(&id).await.or_fetch_error(target)?;
        Ok(row.map(Track))
    }
}
