/// Used when the chosen country has no entry (or no country was chosen).
pub const FALLBACK_NOTE: &str =
    "Local climate and policy conditions will further shape the exact CO₂ savings potential.";

// Keyed by country value, not label.
const CONTEXT_NOTES: &[(&str, &str)] = &[
    (
        "germany",
        "In Germany, the Building Energy Act and feed-in remuneration for rooftop PV make combining envelope insulation with solar generation particularly attractive.",
    ),
    (
        "turkey",
        "In Turkey, high solar irradiation promises strong PV yields, while hot summers make roof insulation especially valuable for cutting cooling demand.",
    ),
];

pub fn context_note(country: &str) -> Option<&'static str> {
    CONTEXT_NOTES
        .iter()
        .find(|(key, _)| *key == country)
        .map(|(_, note)| *note)
}
