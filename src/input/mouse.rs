pub use crossterm::event::MouseButton;

/// Mouse event reduced to what the handlers use: position and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub column: u16,
    pub row: u16,
    pub kind: MouseEventKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Down(MouseButton),
    ScrollUp,
    ScrollDown,
    Other,
}

impl From<crossterm::event::MouseEvent> for MouseEvent {
    fn from(m: crossterm::event::MouseEvent) -> Self {
        use crossterm::event::MouseEventKind as K;
        let kind = match m.kind {
            K::Down(b) => MouseEventKind::Down(b),
            K::ScrollUp => MouseEventKind::ScrollUp,
            K::ScrollDown => MouseEventKind::ScrollDown,
            _ => MouseEventKind::Other,
        };
        MouseEvent {
            column: m.column,
            row: m.row,
            kind,
        }
    }
}
