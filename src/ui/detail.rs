//! Detail presenter: shows the selected name or a placeholder.

use crate::store::AppStore;
use crate::ui::theme::{ACCENT, FOCUSED_BORDER, HEADER_TEXT, PLACEHOLDER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Shown while nothing is selected.
pub const PLACEHOLDER: &str = "Select a name";

const TITLE: &str = "Detail";

/// Text the detail presenter displays for `selection`.
pub fn detail_text(selection: Option<&str>) -> String {
    match selection {
        Some(name) => format!("selectedName: {}", name),
        None => PLACEHOLDER.to_string(),
    }
}

pub struct DetailView<'a> {
    selection: Option<&'a str>,
    store: &'a AppStore,
}

impl<'a> DetailView<'a> {
    pub fn new(selection: Option<&'a str>, store: &'a AppStore) -> Self {
        Self { selection, store }
    }

    /// Shared store handed down by the root composer.
    pub fn store(&self) -> &AppStore {
        self.store
    }

    pub fn text(&self) -> String {
        detail_text(self.selection)
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let color = if self.selection.is_some() {
            HEADER_TEXT
        } else {
            PLACEHOLDER_TEXT
        };
        let widget = Paragraph::new(Line::from(Span::styled(
            self.text(),
            Style::default().fg(color),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(TITLE, Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(FOCUSED_BORDER)),
        );
        frame.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_without_selection() {
        assert_eq!(detail_text(None), "Select a name");
    }

    #[test]
    fn selected_name_is_prefixed() {
        assert_eq!(detail_text(Some("Karel")), "selectedName: Karel");
    }

    #[test]
    fn view_reads_given_store() {
        let store = AppStore::default();
        let view = DetailView::new(Some("Piet"), &store);
        assert!(std::ptr::eq(view.store(), &store));
        assert_eq!(view.text(), "selectedName: Piet");
        // Rendering text twice gives the same result.
        assert_eq!(view.text(), view.text());
    }
}
