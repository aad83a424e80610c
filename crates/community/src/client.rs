//! Steam Community API client.
//!
//! Async HTTP client using `reqwest`. Requests within one operation are
//! awaited in sequence; the client spawns nothing and keeps no state beyond
//! its connection pool.

use nowplaying_profile::{COMMUNITY_URL, GamesList, UserProfile};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::debug;

use crate::config::Config;
use crate::error::Error;
use crate::xml;

/// Characters escaped in the user path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Steam Community API client.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a new client for the public community site.
    pub fn new() -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("nowplaying/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: COMMUNITY_URL.to_string(),
        })
    }

    /// Sets a custom base URL (for testing).
    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Performs a GET request for the XML form of a community page.
    async fn get(&self, path: &str) -> Result<Vec<u8>, Error> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "requesting community document");

        let resp = self.http.get(&url).query(&[("xml", "1")]).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }

    /// Returns the user's profile.
    ///
    /// The summary has its `<br>` tags removed and `game_count` is filled in
    /// from a second request for the games document.
    pub async fn get_user(&self, config: &Config) -> Result<UserProfile, Error> {
        config.validate()?;

        let body = self.get(&profile_path(&config.user)).await?;
        let mut profile = xml::decode_profile(&body)?;
        profile.strip_summary_breaks();
        profile.game_count = self.get_games(config).await?.len();

        Ok(profile)
    }

    /// Returns every game the user owns, in document order.
    pub async fn get_games(&self, config: &Config) -> Result<GamesList, Error> {
        config.validate()?;

        let body = self.get(&games_path(&config.user)).await?;
        xml::decode_games(&body)
    }

    /// Returns the user's games ranked for the recently-played view and
    /// truncated to `config.limit`.
    pub async fn get_recently_played(&self, config: &Config) -> Result<GamesList, Error> {
        let games = self.get_games(config).await?;
        let ranked = games.recently_played(config.effective_limit());
        debug!(
            owned = games.len(),
            shown = ranked.len(),
            "ranked recently played games"
        );
        Ok(ranked)
    }
}

fn encode_user(user: &str) -> String {
    utf8_percent_encode(user.trim(), PATH_SEGMENT).to_string()
}

fn profile_path(user: &str) -> String {
    format!("/id/{}", encode_user(user))
}

fn games_path(user: &str) -> String {
    format!("/id/{}/games/", encode_user(user))
}
