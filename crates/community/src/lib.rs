//! Steam Community XML API client.
//!
//! Fetches the public profile and owned-games documents of a community user
//! (`/id/<user>?xml=1`, `/id/<user>/games/?xml=1`), decodes them into the
//! `nowplaying-profile` types and builds the ranked recently-played view.
//!
//! Every operation takes an explicit [`Config`] and returns a [`Result`];
//! nothing here keeps state between calls.

pub mod client;
pub mod config;
pub mod error;
pub mod xml;

pub use client::Client;
pub use config::Config;
pub use error::Error;
pub use nowplaying_profile::{GamesList, OwnedGame, UserProfile};
