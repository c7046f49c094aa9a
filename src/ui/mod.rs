pub mod colors;
pub mod layout;
pub mod themes;
pub mod ui_main;
pub mod widgets;

pub use themes::Theme;
pub use ui_main::{draw_frame, ui};
