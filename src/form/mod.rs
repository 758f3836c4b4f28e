//! Headless form session: owns the Selection and the last Resolution, and
//! applies the page's rules (submit resolves, any change invalidates, reset
//! clears) through an explicit reducer.

pub mod effects;
pub mod event;
pub mod reactor;
pub mod state;

pub use effects::SideEffect;
pub use event::{Command, FormEvent};
pub use reactor::Configurator;
pub use state::{FormDelta, FormState};
