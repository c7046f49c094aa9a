// Named key predicates so handlers ask "is this the run key?" rather than
// matching raw key codes. All of them read the runtime keybind table.

use crate::app::settings::runtime_keybinds;
use crate::input::KeyEvent;

fn is_bound(action: &str, ev: &KeyEvent) -> bool {
	runtime_keybinds::with(|k| k.is_bound(action, ev))
}

pub fn is_quit(ev: &KeyEvent) -> bool {
	is_bound("quit", ev)
}

pub fn is_force_quit(ev: &KeyEvent) -> bool {
	is_bound("force_quit", ev)
}

pub fn is_run(ev: &KeyEvent) -> bool {
	is_bound("run", ev)
}

pub fn is_up(ev: &KeyEvent) -> bool {
	is_bound("up", ev)
}

pub fn is_down(ev: &KeyEvent) -> bool {
	is_bound("down", ev)
}

pub fn is_enter(ev: &KeyEvent) -> bool {
	is_bound("enter", ev)
}

pub fn is_backspace(ev: &KeyEvent) -> bool {
	is_bound("backspace", ev)
}

pub fn is_esc(ev: &KeyEvent) -> bool {
	is_bound("esc", ev)
}

pub fn is_tab(ev: &KeyEvent) -> bool {
	is_bound("tab", ev)
}

pub fn is_backtab(ev: &KeyEvent) -> bool {
	is_bound("backtab", ev)
}

pub fn is_page_up(ev: &KeyEvent) -> bool {
	is_bound("page_up", ev)
}

pub fn is_page_down(ev: &KeyEvent) -> bool {
	is_bound("page_down", ev)
}
