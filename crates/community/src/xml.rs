//! Decoding of community XML documents.
//!
//! The API reports failures inside an otherwise successful response:
//!
//! ```xml
//! <response><error><![CDATA[The specified profile could not be found.]]></error></response>
//! ```
//!
//! Each decoder looks for that `<error>` element first and turns it into
//! [`Error::Community`].

use nowplaying_profile::{GamesList, OwnedGame, UserProfile};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Error;

/// Any community document, reduced to its optional `<error>` element.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ErrorDocument {
    error: Option<String>,
}

/// `<gamesList>` document (internal).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GamesDocument {
    games: GamesElement,
}

/// `<games>` element holding repeated `<game>` children.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GamesElement {
    game: Vec<OwnedGame>,
}

/// Decodes a `<profile>` document.
pub fn decode_profile(body: &[u8]) -> Result<UserProfile, Error> {
    check_error(body)?;
    let profile: UserProfile = quick_xml::de::from_reader(body)?;
    debug!(steam_id = %profile.steam_id, "decoded profile");
    Ok(profile)
}

/// Decodes a `<gamesList>` document, keeping document order.
pub fn decode_games(body: &[u8]) -> Result<GamesList, Error> {
    check_error(body)?;
    let doc: GamesDocument = quick_xml::de::from_reader(body)?;
    debug!(count = doc.games.game.len(), "decoded games list");
    Ok(GamesList::new(doc.games.game))
}

fn check_error(body: &[u8]) -> Result<(), Error> {
    let doc: ErrorDocument = quick_xml::de::from_reader(body)?;
    match doc.error {
        Some(message) if !message.trim().is_empty() => {
            warn!(%message, "community API returned an error document");
            Err(Error::Community(message))
        }
        _ => Ok(()),
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn profile_fields() {
        let profile = decode_profile(PROFILE.as_bytes()).unwrap();
        assert_eq!(profile.steam_id64, "76561197960435530");
        assert_eq!(profile.steam_id, "Robin");
        assert_eq!(profile.online_state, "online");
        assert_eq!(profile.state_message, "Online");
        assert_eq!(profile.avatar_icon, "https://avatars.example.com/robin.jpg");
        assert_eq!(
            profile.avatar_full,
            "https://avatars.example.com/robin_full.jpg"
        );
        assert_eq!(profile.custom_url, "robinwalker");
        assert_eq!(profile.member_since, "October 1, 2003");
        assert_eq!(profile.steam_rating, "7");
        assert_eq!(profile.hours_played_2wk, "4.5");
        assert_eq!(profile.realname, "Robin Walker");
        assert_eq!(profile.game_count, 0);
    }

    #[test]
    fn profile_summary_is_raw_cdata() {
        let profile = decode_profile(PROFILE.as_bytes()).unwrap();
        assert_eq!(profile.summary, "Working on games.<br>Hats too.<br>");
    }

    #[test]
    fn profile_missing_elements_are_empty() {
        let xml = "<profile><steamID>Lonely</steamID></profile>";
        let profile = decode_profile(xml.as_bytes()).unwrap();
        assert_eq!(profile.steam_id, "Lonely");
        assert!(profile.summary.is_empty());
        assert!(profile.steam_rating.is_empty());
        assert!(profile.avatar_medium.is_empty());
    }

    #[test]
    fn games_in_document_order() {
        let games = decode_games(GAMES.as_bytes()).unwrap();
        let names: Vec<_> = games.games.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Portal", "Team Fortress 2", "Portal 2", "Dota 2"]);
    }

    #[test]
    fn game_fields() {
        let games = decode_games(GAMES.as_bytes()).unwrap();
        let tf2 = &games.games[1];
        assert_eq!(tf2.app_id, "440");
        assert_eq!(tf2.logo, "https://cdn.example.com/440/logo.jpg");
        assert_eq!(tf2.store_link, "https://store.example.com/app/440");
        assert_eq!(tf2.hours_last_2_weeks, "1.5");
        assert_eq!(tf2.hours_on_record, "1,234.5");
    }

    #[test]
    fn missing_two_week_hours_is_empty() {
        let games = decode_games(GAMES.as_bytes()).unwrap();
        assert!(games.games[0].hours_last_2_weeks.is_empty());
        assert!(!games.games[0].is_recently_played());
        assert!(games.games[1].is_recently_played());
    }

    #[test]
    fn empty_games_element() {
        let xml = "<gamesList><steamID64>1</steamID64><games></games></gamesList>";
        let games = decode_games(xml.as_bytes()).unwrap();
        assert!(games.is_empty());
    }

    #[test]
    fn missing_games_element() {
        let xml = "<gamesList><steamID64>1</steamID64></gamesList>";
        let games = decode_games(xml.as_bytes()).unwrap();
        assert!(games.is_empty());
    }

    #[test]
    fn private_games_is_community_error() {
        let err = decode_games(PRIVATE_GAMES.as_bytes()).unwrap_err();
        match err {
            Error::Community(msg) => assert_eq!(msg, "This profile is private."),
            other => panic!("expected Community error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_profile_is_community_error() {
        let err = decode_profile(UNKNOWN_PROFILE.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Community(ref msg) if msg.contains("could not be found")));
    }

    #[test]
    fn malformed_is_decode_error() {
        let err = decode_games(MALFORMED.as_bytes()).unwrap_err();
        assert!(err.is_decode(), "expected decode error, got {err:?}");
    }
}
