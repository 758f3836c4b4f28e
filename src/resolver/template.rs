use crate::catalog::{context_note, label_for, Category, FALLBACK_NOTE};
use crate::selection::Selection;

use super::{Resolution, Resolve};

pub const INCOMPLETE_MESSAGE: &str = "Please fill in all fields before sending.";

const FIELDS: &[Category] = &[
    Category::Country,
    Category::Space,
    Category::Material,
    Category::Shape,
    Category::Pitch,
];

const REQUIRED_WITHOUT_COUNTRY: &[Category] = &[
    Category::Space,
    Category::Material,
    Category::Shape,
    Category::Pitch,
];

/// Builds the suggestion sentence from option labels and a country note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateResolver {
    pub country_required: bool,
    /// Treat a value missing from its option set as unset instead of
    /// rendering the raw value in place of the label.
    pub strict_labels: bool,
}

impl Default for TemplateResolver {
    fn default() -> Self {
        Self {
            country_required: true,
            strict_labels: false,
        }
    }
}

impl TemplateResolver {
    fn usable(&self, category: Category, value: &str) -> bool {
        !self.strict_labels || category.accepts(value)
    }

    fn compose(&self, selection: &Selection) -> String {
        let field = |c: Category| selection.get(c).unwrap_or_default();

        let space = readable(Category::Space, field(Category::Space)).to_lowercase();
        let material = readable(Category::Material, field(Category::Material)).to_lowercase();
        let shape = readable(Category::Shape, field(Category::Shape)).to_lowercase();
        let pitch = readable(Category::Pitch, field(Category::Pitch)).to_lowercase();

        let country = selection
            .get(Category::Country)
            .filter(|v| self.usable(Category::Country, v));
        let location = country
            .map(|c| format!(" in {}", readable(Category::Country, c)))
            .unwrap_or_default();
        let note = country.and_then(context_note).unwrap_or(FALLBACK_NOTE);

        format!(
            "Based on your {space}{location} with a {pitch} {shape} roof made of {material}, \
             there is likely a solid potential for CO₂ savings by combining better insulation \
             and on-site renewable energy solutions. A tailored concept could estimate your \
             annual energy demand, possible PV yield and related CO₂ reductions for this \
             specific configuration. {note}"
        )
    }
}

impl Resolve for TemplateResolver {
    fn fields(&self) -> &[Category] {
        FIELDS
    }

    fn required(&self) -> &[Category] {
        if self.country_required {
            FIELDS
        } else {
            REQUIRED_WITHOUT_COUNTRY
        }
    }

    fn resolve(&self, selection: &Selection) -> Resolution {
        let complete = self.required().iter().all(|c| {
            selection
                .get(*c)
                .is_some_and(|value| self.usable(*c, value))
        });
        if !complete {
            return Resolution::Error(INCOMPLETE_MESSAGE.to_string());
        }

        Resolution::Suggestion(self.compose(selection))
    }
}

/// Label for `value`, or the value itself when the option set has no entry.
fn readable(category: Category, value: &str) -> &str {
    label_for(category.options(), value).unwrap_or(value)
}
