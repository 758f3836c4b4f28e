//! Static data behind the configurator: option sets, per-country context
//! notes and the nested suggestion table.

pub mod notes;
pub mod options;
pub mod table;

pub use notes::{context_note, FALLBACK_NOTE};
pub use options::{label_for, Category, SelectOption};
pub use table::SuggestionTable;
