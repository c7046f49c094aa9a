use super::catalog::Template;
use super::surfaces::{IntentField, LogBuffer, Pulse, PulseStyle, TemplateList};
use super::types::Focus;

pub const READY_MESSAGE: &str = "Ready — demo mode";

/// All mutable UI state for one session. The demo runner and the renderer
/// both receive it explicitly; nothing looks surfaces up by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UIState {
    pub intent: IntentField,
    pub log: LogBuffer,
    pub pulse: Pulse,
    pub templates: TemplateList,
    pub focus: Focus,
}

impl UIState {
    /// Startup state: template list rendered, pulse showing the ready text.
    pub fn new(catalog: &[Template]) -> Self {
        let mut state = Self::default();
        state.templates.render(catalog);
        state.set_status(READY_MESSAGE, PulseStyle::Neutral);
        state
    }

    pub fn set_status(&mut self, message: &str, style: PulseStyle) {
        self.pulse.set(message, style);
    }

    /// Fill the intent field from template `index`. Returns `true` when the
    /// activation was consumed; nothing else reacts to it.
    pub fn activate_template(&mut self, index: usize) -> bool {
        let Some(intent) = self.templates.intent_at(index).map(str::to_owned) else {
            return false;
        };
        self.templates.select(index);
        self.intent.set(intent);
        true
    }
}
