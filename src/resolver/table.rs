use crate::catalog::{Category, SuggestionTable};
use crate::selection::Selection;

use super::{Resolution, Resolve};

pub const INCOMPLETE_MESSAGE: &str = "Please select country, roof type and wall type.";

/// Returned as a suggestion, not an error: the input was complete.
pub const NO_MATCH_MESSAGE: &str = "No suggestion found for this combination in the data.";

const FIELDS: &[Category] = &[Category::Country, Category::RoofType, Category::WallType];

/// Exact-triple lookup into a [`SuggestionTable`].
#[derive(Debug, Clone)]
pub struct TableResolver {
    table: SuggestionTable,
}

impl TableResolver {
    pub fn new(table: SuggestionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &SuggestionTable {
        &self.table
    }
}

impl Default for TableResolver {
    fn default() -> Self {
        Self::new(SuggestionTable::builtin())
    }
}

impl Resolve for TableResolver {
    fn fields(&self) -> &[Category] {
        FIELDS
    }

    fn required(&self) -> &[Category] {
        FIELDS
    }

    fn cascade(&self) -> &[Category] {
        FIELDS
    }

    fn resolve(&self, selection: &Selection) -> Resolution {
        let (Some(country), Some(roof_type), Some(wall_type)) = (
            selection.get(Category::Country),
            selection.get(Category::RoofType),
            selection.get(Category::WallType),
        ) else {
            return Resolution::Error(INCOMPLETE_MESSAGE.to_string());
        };

        let text = self
            .table
            .lookup(country, roof_type, wall_type)
            .unwrap_or(NO_MATCH_MESSAGE);
        Resolution::Suggestion(text.to_string())
    }
}
