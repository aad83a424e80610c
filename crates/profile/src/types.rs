//! Domain types for Steam Community profiles and owned games.
//!
//! Field names deserialize from the community XML element names and serialize
//! as camelCase. Every remote value is kept as an opaque string; missing
//! elements become empty strings.

use serde::{Deserialize, Serialize};

use crate::ranking;
use crate::rating;

/// Root of the Steam Community web site.
pub const COMMUNITY_URL: &str = "https://steamcommunity.com";

/// A public Steam Community profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename(deserialize = "steamID64"))]
    pub steam_id64: String,
    /// Display handle.
    #[serde(rename(deserialize = "steamID"))]
    pub steam_id: String,
    #[serde(rename(deserialize = "onlineState"))]
    pub online_state: String,
    #[serde(rename(deserialize = "stateMessage"))]
    pub state_message: String,
    #[serde(rename(deserialize = "avatarIcon"))]
    pub avatar_icon: String,
    #[serde(rename(deserialize = "avatarMedium"))]
    pub avatar_medium: String,
    #[serde(rename(deserialize = "avatarFull"))]
    pub avatar_full: String,
    /// Vanity path segment, the `<user>` in `/id/<user>`.
    #[serde(rename(deserialize = "customURL"))]
    pub custom_url: String,
    #[serde(rename(deserialize = "memberSince"))]
    pub member_since: String,
    /// Community rating code, `"1"` to `"10"` when set.
    #[serde(rename(deserialize = "steamRating"))]
    pub steam_rating: String,
    #[serde(rename(deserialize = "hoursPlayed2Wk"))]
    pub hours_played_2wk: String,
    pub location: String,
    pub realname: String,
    pub summary: String,
    /// Number of owned games. Not part of the profile document; filled in
    /// from the games document by the client.
    #[serde(skip_deserializing)]
    pub game_count: usize,
}

impl UserProfile {
    /// Returns the community URL of this profile.
    pub fn full_url(&self) -> String {
        format!("{COMMUNITY_URL}/id/{}", self.custom_url)
    }

    /// Returns the label for this profile's rating code.
    pub fn rating_description(&self) -> &'static str {
        rating::rating_label(&self.steam_rating)
    }

    /// Removes every literal `<br>` from the summary.
    pub fn strip_summary_breaks(&mut self) {
        if self.summary.contains("<br>") {
            self.summary = self.summary.replace("<br>", "");
        }
    }
}

/// A game owned by a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OwnedGame {
    #[serde(rename(deserialize = "appID"))]
    pub app_id: String,
    pub name: String,
    /// Artwork URL.
    pub logo: String,
    #[serde(rename(deserialize = "storeLink"))]
    pub store_link: String,
    /// Hours played in the last two weeks. Empty when the game was not
    /// played recently.
    #[serde(rename(deserialize = "hoursLast2Weeks"))]
    pub hours_last_2_weeks: String,
    /// Total hours on record, decimal string, possibly empty.
    #[serde(rename(deserialize = "hoursOnRecord"))]
    pub hours_on_record: String,
}

impl OwnedGame {
    /// Returns `true` if the two-week hours field is present.
    ///
    /// Presence is the flag: `"0"` still counts as recently played.
    pub fn is_recently_played(&self) -> bool {
        !self.hours_last_2_weeks.is_empty()
    }

    /// Two-week hours as a number, 0 when empty or unparsable.
    pub fn hours_last_2_weeks_value(&self) -> f64 {
        ranking::parse_hours(&self.hours_last_2_weeks)
    }

    /// Lifetime hours as a number, 0 when empty or unparsable.
    pub fn hours_on_record_value(&self) -> f64 {
        ranking::parse_hours(&self.hours_on_record)
    }
}

/// The games owned by a user, in document or ranked order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GamesList {
    pub games: Vec<OwnedGame>,
}

impl GamesList {
    pub fn new(games: Vec<OwnedGame>) -> Self {
        Self { games }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Returns a ranked copy of this list, truncated to `limit` games.
    ///
    /// A `limit` of 0 means no limit. See [`ranking::rank_recently_played`].
    pub fn recently_played(&self, limit: usize) -> GamesList {
        GamesList::new(ranking::rank_recently_played(self.games.clone(), limit))
    }

    /// Total hours played in the last two weeks across all games.
    pub fn hours_played_2wk(&self) -> f64 {
        ranking::total_hours_last_2_weeks(&self.games)
    }
}

impl From<Vec<OwnedGame>> for GamesList {
    fn from(games: Vec<OwnedGame>) -> Self {
        Self::new(games)
    }
}
