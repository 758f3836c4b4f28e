use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;

type WallMap = BTreeMap<String, String>;
type RoofMap = BTreeMap<String, WallMap>;

// Entries are content, kept exactly as authored (mixed-language included).
const BUILTIN_ENTRIES: &[(&str, &str, &str, &str)] = &[
    ("germany", "flat", "brick", "Germany + Flat + Brick: PV + good insulation önerilir."),
    ("germany", "flat", "wood", "Germany + Flat + Wood: Fire safety ve iyi dış cephe kaplaması önemli."),
    ("germany", "pitched", "brick", "Germany + Pitched + Brick: Roof tiles + PV çok yaygın."),
    ("germany", "pitched", "wood", "Germany + Pitched + Wood: Lightweight PV sistem düşün."),
    ("turkey", "flat", "brick", "Turkey + Flat + Brick: Yalıtım + su yalıtımı + PV mantıklı."),
    ("turkey", "flat", "wood", "Turkey + Flat + Wood: Güneş + hafif malzeme tercih et."),
    ("turkey", "pitched", "brick", "Turkey + Pitched + Brick: Kiremit + iyi yalıtım."),
    ("turkey", "pitched", "wood", "Turkey + Pitched + Wood: Rüzgâra dayanıklı hafif çatı sistemi."),
];

/// `country -> roof type -> wall type -> suggestion`.
///
/// Coverage is allowed to be partial; [`SuggestionTable::lookup`] reports a
/// gap at any level as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionTable {
    entries: BTreeMap<String, RoofMap>,
}

impl SuggestionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the page.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (country, roof, wall, text) in BUILTIN_ENTRIES {
            table.insert(country, roof, wall, text);
        }
        table
    }

    /// Reads a table in the same nested JSON shape it serializes to.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn insert(&mut self, country: &str, roof_type: &str, wall_type: &str, text: &str) {
        self.entries
            .entry(country.to_string())
            .or_default()
            .entry(roof_type.to_string())
            .or_default()
            .insert(wall_type.to_string(), text.to_string());
    }

    pub fn lookup(&self, country: &str, roof_type: &str, wall_type: &str) -> Option<&str> {
        self.entries
            .get(country)?
            .get(roof_type)?
            .get(wall_type)
            .map(String::as_str)
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries
            .values()
            .flat_map(|roofs| roofs.values())
            .map(|walls| walls.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
