//! SQLite-backed catalog storage.
//!
//! This module reads the Chinook catalog database. Connections are opened
//! read-only, one per `connect()` call, and every statement runs on the tokio
//! blocking pool.

use super::models::{AlbumRow, ArtistRow, TrackRow};
use super::trait_def::{CatalogConnection, CatalogConnector, StorageError};
use async_trait::async_trait;
use rusqlite::{params, Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Opens read-only connections to a Chinook SQLite file.
#[derive(Clone, Debug)]
pub struct SqliteCatalogConnector {
    db_path: PathBuf,
}

impl SqliteCatalogConnector {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        SqliteCatalogConnector {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    /// Open a connection without going through the async runtime.
    pub fn open_blocking(&self) -> Result<SqliteCatalogConnection, StorageError> {
        // Read-only opens fail on missing files too, but this keeps the error readable.
        if !self.db_path.is_file() {
            return Err(StorageError::MissingDatabase(self.db_path.clone()));
        }

        let conn = Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        Ok(SqliteCatalogConnection {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

#[async_trait]
impl CatalogConnector for SqliteCatalogConnector {
    async fn connect(&self) -> Result<Box<dyn CatalogConnection>, StorageError> {
        let connector = self.clone();
        let connection = tokio::task::spawn_blocking(move || connector.open_blocking()).await??;
        debug!("Opened catalog connection to {:?}", self.db_path);
        Ok(Box::new(connection))
    }
}

/// One open read-only connection to the catalog.
pub struct SqliteCatalogConnection {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteCatalogConnection {
    /// Run `f` against the connection on the blocking pool.
    async fn run<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| StorageError::Poisoned)?;
            f(&guard).map_err(StorageError::from)
        })
        .await?
    }

    fn query_albums(
        conn: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> rusqlite::Result<Vec<AlbumRow>> {
        let mut stmt = conn.prepare_cached(sql)?;
        let rows = stmt
            .query_map(params, AlbumRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    fn query_artists(
        conn: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> rusqlite::Result<Vec<ArtistRow>> {
        let mut stmt = conn.prepare_cached(sql)?;
        let rows = stmt
            .query_map(params, ArtistRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    fn query_tracks(
        conn: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> rusqlite::Result<Vec<TrackRow>> {
        let mut stmt = conn.prepare_cached(sql)?;
        let rows = stmt
            .query_map(params, TrackRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Collapse "no rows" into `None`, keep every other error.
    fn optional<T>(result: rusqlite::Result<T>) -> rusqlite::Result<Option<T>> {
        match result {
            Ok(row) => Ok(Some(row)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl CatalogConnection for SqliteCatalogConnection {
    async fn get_all_albums(&self) -> Result<Vec<AlbumRow>, StorageError> {
        self.run(|conn| {
            Self::query_albums(
                conn,
                "SELECT AlbumId, Title, ArtistId FROM albums",
                params![],
            )
        })
        .await
    }

    async fn get_all_artists(&self) -> Result<Vec<ArtistRow>, StorageError> {
        self.run(|conn| Self::query_artists(conn, "SELECT ArtistId, Name FROM artists", params![]))
            .await
    }

    async fn get_album_by_id(&self, id: &str) -> Result<Option<AlbumRow>, StorageError> {
        let id = id.to_string();
        self.run(move |conn| {
            Self::optional(conn.query_row(
                "SELECT AlbumId, Title, ArtistId FROM albums WHERE AlbumId = ?1",
                params![id],
                AlbumRow::from_row,
            ))
        })
        .await
    }

    async fn get_artist_by_id(&self, id: &str) -> Result<Option<ArtistRow>, StorageError> {
        let id = id.to_string();
        self.run(move |conn| {
            Self::optional(conn.query_row(
                "SELECT ArtistId, Name FROM artists WHERE ArtistId = ?1",
                params![id],
                ArtistRow::from_row,
            ))
        })
        .await
    }

    async fn get_track_by_id(&self, id: &str) -> Result<Option<TrackRow>, StorageError> {
        let id = id.to_string();
        self.run(move |conn| {
            Self::optional(conn.query_row(
                "SELECT TrackId, Name, AlbumId, Composer, Milliseconds, Bytes, UnitPrice
                 FROM tracks WHERE TrackId = ?1",
                params![id],
                TrackRow::from_row,
            ))
        })
        .await
    }

    async fn get_albums_by_artist_id(
        &self,
        artist_id: i64,
    ) -> Result<Vec<AlbumRow>, StorageError> {
        self.run(move |conn| {
            Self::query_albums(
                conn,
                "SELECT AlbumId, Title, ArtistId FROM albums WHERE ArtistId = ?1",
                params![artist_id],
            )
        })
        .await
    }

    async fn get_tracks_by_artist_id(
        &self,
        artist_id: i64,
    ) -> Result<Vec<TrackRow>, StorageError> {
        self.run(move |conn| {
            Self::query_tracks(
                conn,
                "SELECT t.TrackId AS TrackId, t.Name AS Name, t.AlbumId AS AlbumId,
                        t.Composer AS Composer, t.Milliseconds AS Milliseconds,
                        t.Bytes AS Bytes, t.UnitPrice AS UnitPrice
                 FROM tracks t
                 INNER JOIN albums al ON t.AlbumId = al.AlbumId
                 WHERE al.ArtistId = ?1",
                params![artist_id],
            )
        })
        .await
    }

    async fn get_tracks_by_album_id(&self, album_id: i64) -> Result<Vec<TrackRow>, StorageError> {
        self.run(move |conn| {
            Self::query_tracks(
                conn,
                "SELECT TrackId, Name, AlbumId, Composer, Milliseconds, Bytes, UnitPrice
                 FROM tracks WHERE AlbumId = ?1",
                params![album_id],
            )
        })
        .await
    }

    async fn get_artist_by_track_id(
        &self,
        track_id: i64,
    ) -> Result<Option<ArtistRow>, StorageError> {
        self.run(move |conn| {
            Self::optional(conn.query_row(
                "SELECT ar.ArtistId AS ArtistId, ar.Name AS Name
                 FROM tracks t
                 INNER JOIN albums al ON t.AlbumId = al.AlbumId
                 INNER JOIN artists ar ON al.ArtistId = ar.ArtistId
                 WHERE t.TrackId = ?1",
                params![track_id],
                ArtistRow::from_row,
            ))
        })
        .await
    }
}
