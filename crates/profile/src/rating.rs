//! Community rating code labels.

/// Label for an unset or unknown rating code.
pub const DEFAULT_RATING_LABEL: &str = "Playing on PS3";

/// Maps a rating code (`"1"` to `"10"`) to its label.
///
/// Matches the exact string; anything else gets [`DEFAULT_RATING_LABEL`].
pub fn rating_label(code: &str) -> &'static str {
    match code {
        "10" => "EAGLES SCREAM",
        "9" => "Still not 10",
        "8" => "COBRA KAI!",
        "7" => "Wax on, Wax off",
        "6" => "Oooh! Shiny!",
        "5" => "Halfway Cool",
        "4" => "Master of Nothing",
        "3" => "Shooting Blanks",
        "2" => "Nearly Lifeless",
        "1" => "El Terrible!",
        _ => DEFAULT_RATING_LABEL,
    }
}
