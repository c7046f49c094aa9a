use ratatui::{layout::Rect, widgets::{List, ListItem, ListState}};
use ratatui::Frame;
use crate::app::TemplateList;

/// Render the template entries. The keyboard selection is highlighted only
/// while the list has focus. The scroll offset comes from the list itself so
/// mouse hit-testing sees the same rows.
pub fn render(f: &mut Frame, area: Rect, list: &TemplateList, focused: bool) {
    let colors = crate::ui::colors::current();
    let items: Vec<ListItem> = list
        .entries()
        .iter()
        .map(|e| ListItem::new(e.label.as_str()))
        .collect();
    let block = super::surface_block(" Templates ", focused, &colors);
    let height = block.inner(area).height as usize;
    let mut widget = List::new(items).block(block);
    if focused {
        widget = widget.highlight_style(colors.selected_style).highlight_symbol("› ");
    }
    let mut state = ListState::default()
        .with_offset(list.view_offset(height))
        .with_selected((!list.is_empty()).then_some(list.selected()));
    f.render_stateful_widget(widget, area, &mut state);
}
