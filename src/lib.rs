pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod resolver;
pub mod selection;

// Re-export the pieces most callers need
pub use config::{ConfiguratorConfig, StrategyKind};
pub use resolver::{Resolution, Resolve, Resolver};
pub use selection::Selection;
