use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// The user's current picks, one optional value per category.
///
/// An empty string counts as unset, same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub country: Option<String>,
    pub space: Option<String>,
    pub material: Option<String>,
    pub shape: Option<String>,
    pub pitch: Option<String>,
    pub roof_type: Option<String>,
    pub wall_type: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for tests and fixtures.
    pub fn with(mut self, category: Category, value: &str) -> Self {
        self.set(category, Some(value.to_string()));
        self
    }

    pub fn get(&self, category: Category) -> Option<&str> {
        self.slot(category)
            .as_deref()
            .filter(|value| !value.is_empty())
    }

    pub fn is_set(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    pub fn set(&mut self, category: Category, value: Option<String>) {
        *self.slot_mut(category) = value.filter(|v| !v.is_empty());
    }

    pub fn clear(&mut self, category: Category) {
        self.set(category, None);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Categories from `required` that are still unset, in the given order.
    pub fn missing(&self, required: &[Category]) -> Vec<Category> {
        required.iter().copied().filter(|c| !self.is_set(*c)).collect()
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| !self.is_set(*c))
    }

    fn slot(&self, category: Category) -> &Option<String> {
        match category {
            Category::Country => &self.country,
            Category::Space => &self.space,
            Category::Material => &self.material,
            Category::Shape => &self.shape,
            Category::Pitch => &self.pitch,
            Category::RoofType => &self.roof_type,
            Category::WallType => &self.wall_type,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<String> {
        match category {
            Category::Country => &mut self.country,
            Category::Space => &mut self.space,
            Category::Material => &mut self.material,
            Category::Shape => &mut self.shape,
            Category::Pitch => &mut self.pitch,
            Category::RoofType => &mut self.roof_type,
            Category::WallType => &mut self.wall_type,
        }
    }
}
