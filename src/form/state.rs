use crate::catalog::Category;
use crate::resolver::Resolution;
use crate::selection::Selection;

/// The only way form state mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormDelta {
    /// `None` clears the field.
    FieldChanged {
        category: Category,
        value: Option<String>,
    },
    Submitted(Resolution),
    Reset,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    selection: Selection,
    result: Option<Resolution>,
    // Monotonic, bumped by every reduction.
    pub version: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Last submit outcome, if nothing changed since.
    pub fn result(&self) -> Option<&Resolution> {
        self.result.as_ref()
    }

    /// Pure reduction: State + Delta -> mutated State
    pub fn reduce(&mut self, delta: FormDelta) {
        self.version += 1;

        match delta {
            FormDelta::FieldChanged { category, value } => {
                self.selection.set(category, value);
                self.result = None;
            }
            FormDelta::Submitted(resolution) => {
                self.result = Some(resolution);
            }
            FormDelta::Reset => {
                self.selection.reset();
                self.result = None;
            }
        }
    }

    /// Mirrors the disabled submit button: all `required` fields are set.
    pub fn can_submit(&self, required: &[Category]) -> bool {
        self.selection.missing(required).is_empty()
    }

    /// A field inside `cascade` unlocks once every earlier field is set.
    /// Fields outside the cascade are always enabled.
    pub fn field_enabled(&self, cascade: &[Category], category: Category) -> bool {
        match cascade.iter().position(|c| *c == category) {
            Some(idx) => cascade[..idx].iter().all(|c| self.selection.is_set(*c)),
            None => true,
        }
    }
}
