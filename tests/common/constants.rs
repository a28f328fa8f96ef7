//! Shared constants for end-to-end tests
//!
//! When the fixture catalog changes, update only this file.

#![allow(dead_code)]

// ============================================================================
// Test Catalog
// ============================================================================

pub const ARTIST_1_NAME: &str = "AC/DC";
pub const ARTIST_2_NAME: &str = "Accept";
pub const ARTIST_3_NAME: &str = "Aerosmith";

/// By AC/DC
pub const ALBUM_1_TITLE: &str = "For Those About To Rock We Salute You";
/// By Accept
pub const ALBUM_2_TITLE: &str = "Balls to the Wall";
/// By Accept
pub const ALBUM_3_TITLE: &str = "Restless and Wild";
/// By AC/DC
pub const ALBUM_4_TITLE: &str = "Let There Be Rock";

/// On "For Those About To Rock We Salute You"
pub const TRACK_1_NAME: &str = "For Those About To Rock (We Salute You)";
pub const TRACK_1_COMPOSER: &str = "Angus Young, Malcolm Young, Brian Johnson";
pub const TRACK_1_MILLISECONDS: i64 = 343719;
pub const TRACK_1_BYTES: i64 = 11170334;

/// On "Balls to the Wall", no composer
pub const TRACK_2_NAME: &str = "Balls to the Wall";

/// Track with no album
pub const LOOSE_TRACK_ID: &str = "99";

// ============================================================================
// Server
// ============================================================================

pub const GRAPHQL_PATH: &str = "/gql";

/// Message clients get when the catalog can't be read for a root album listing.
pub const ALBUMS_FAILURE_MESSAGE: &str = "Failed to fetch albums";

/// Maximum time to wait for the server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Default request timeout for the test client
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Interval between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
