pub mod catalog;
pub mod core;
pub mod settings;
pub mod state;
pub mod surfaces;
pub mod types;

pub use self::core::App;
pub use state::UIState;
pub use surfaces::{IntentField, LogBuffer, Pulse, PulseStyle, TemplateEntry, TemplateList};
pub use types::{Focus, RunId, Surface};
