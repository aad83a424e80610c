//! Recently-played ranking.
//!
//! Games played in the last two weeks always rank above games that were not,
//! whatever their lifetime hours. Within each group, more hours rank first:
//! two-week hours for the active group, hours on record for the rest.
//! Malformed hour values never fail the ranking; they count as zero.

use std::cmp::Ordering;

use tracing::trace;

use crate::types::OwnedGame;

/// Parses an hours field, returning 0 for empty or unparsable values.
pub fn parse_hours(value: &str) -> f64 {
    match value.parse::<f64>() {
        Ok(hours) if !hours.is_nan() => hours,
        _ => {
            if !value.is_empty() {
                trace!(value, "unparsable hours value, counting as zero");
            }
            0.0
        }
    }
}

/// Orders `games` into the recently-played view and keeps the first `limit`.
///
/// 1. Split into active (non-empty two-week hours) and dormant games.
/// 2. Active games: descending by two-week hours.
/// 3. Dormant games: descending by hours on record.
/// 4. Active first, then dormant.
/// 5. Truncate to `limit`; 0 or a limit past the end keeps everything.
///
/// Both sorts are stable, so games with equal hours keep their input order.
pub fn rank_recently_played(games: Vec<OwnedGame>, limit: usize) -> Vec<OwnedGame> {
    let (mut ranked, mut dormant): (Vec<_>, Vec<_>) =
        games.into_iter().partition(OwnedGame::is_recently_played);

    sort_descending_by(&mut ranked, OwnedGame::hours_last_2_weeks_value);
    sort_descending_by(&mut dormant, OwnedGame::hours_on_record_value);

    ranked.append(&mut dormant);

    if limit > 0 {
        ranked.truncate(limit);
    }

    ranked
}

/// Sum of the two-week hours of `games`; empty or unparsable values add 0.
pub fn total_hours_last_2_weeks(games: &[OwnedGame]) -> f64 {
    games.iter().map(OwnedGame::hours_last_2_weeks_value).sum()
}

/// Stable descending sort on a numeric key.
fn sort_descending_by<F>(games: &mut [OwnedGame], key: F)
where
    F: Fn(&OwnedGame) -> f64,
{
    // `parse_hours` never yields NaN, so the comparison is total.
    games.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
}
