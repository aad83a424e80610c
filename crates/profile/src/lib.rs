//! Steam Community profile and owned-games types.
//!
//! This crate holds the **domain model** and the only real decision logic of
//! the workspace: ranking a user's owned games into a "recently played" view.
//! It performs no I/O; `nowplaying-community` fetches and decodes the
//! documents these types are built from.
//!
//! # Modules
//!
//! - **types**: `UserProfile`, `OwnedGame`, `GamesList`
//! - **ranking**: recently-played ordering and two-week hour totals
//! - **rating**: community rating code to label lookup

pub mod ranking;
pub mod rating;
pub mod types;

// Re-export primary types for convenience.
pub use ranking::{rank_recently_played, total_hours_last_2_weeks};
pub use rating::{DEFAULT_RATING_LABEL, rating_label};
pub use types::{COMMUNITY_URL, GamesList, OwnedGame, UserProfile};
