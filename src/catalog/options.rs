use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommandError;

/// One entry of a picker: the stable `value` and the text shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

// Slice order is display order.
pub const COUNTRY_OPTIONS: &[SelectOption] = &[
    opt("germany", "Germany"),
    opt("turkey", "Turkey"),
    opt("czech", "Czech Republic"),
];

pub const SPACE_OPTIONS: &[SelectOption] = &[
    opt("roof", "Roof"),
    opt("balcony", "Balcony"),
    opt("terrace", "Terrace"),
    opt("yard", "Yard"),
    opt("basement", "Basement"),
];

pub const MATERIAL_OPTIONS: &[SelectOption] = &[
    opt("asphalt_shingles", "Asphalt shingles"),
    opt("metal", "Metal"),
    opt("clay_tiles", "Clay tiles"),
    opt("concrete_tiles", "Concrete tiles"),
];

pub const SHAPE_OPTIONS: &[SelectOption] = &[
    opt("gable", "Gable"),
    opt("flat", "Flat"),
    opt("shed", "Shed"),
    opt("pyramid", "Pyramid"),
];

pub const PITCH_OPTIONS: &[SelectOption] = &[
    opt("low", "Low"),
    opt("conventional", "Conventional"),
    opt("steep", "Steep"),
];

pub const ROOF_TYPE_OPTIONS: &[SelectOption] = &[opt("flat", "Flat"), opt("pitched", "Pitched")];

pub const WALL_TYPE_OPTIONS: &[SelectOption] = &[opt("brick", "Brick"), opt("wood", "Wood")];

/// A picker on the form. Each category owns exactly one option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Country,
    Space,
    Material,
    Shape,
    Pitch,
    RoofType,
    WallType,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Country,
        Category::Space,
        Category::Material,
        Category::Shape,
        Category::Pitch,
        Category::RoofType,
        Category::WallType,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Country => "country",
            Category::Space => "space",
            Category::Material => "material",
            Category::Shape => "shape",
            Category::Pitch => "pitch",
            Category::RoofType => "roof_type",
            Category::WallType => "wall_type",
        }
    }

    pub fn options(&self) -> &'static [SelectOption] {
        match self {
            Category::Country => COUNTRY_OPTIONS,
            Category::Space => SPACE_OPTIONS,
            Category::Material => MATERIAL_OPTIONS,
            Category::Shape => SHAPE_OPTIONS,
            Category::Pitch => PITCH_OPTIONS,
            Category::RoofType => ROOF_TYPE_OPTIONS,
            Category::WallType => WALL_TYPE_OPTIONS,
        }
    }

    /// Case-sensitive membership check against this category's option set.
    pub fn accepts(&self, value: &str) -> bool {
        label_for(self.options(), value).is_some()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the dashed spelling too, it is what people type.
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.key() == normalized)
            .ok_or_else(|| CommandError::UnknownCategory(s.to_string()))
    }
}

/// Exact match on `value`. A miss is `None`, never an error.
pub fn label_for(options: &[SelectOption], value: &str) -> Option<&'static str> {
    options.iter().find(|o| o.value == value).map(|o| o.label)
}
