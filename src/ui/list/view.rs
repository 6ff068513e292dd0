use crate::ui::list::state::NameListState;
use crate::ui::theme::{
    ACCENT, CURSOR_HIGHLIGHT, FOCUSED_BORDER, GLOBAL_BORDER, HEADER_TEXT, SELECTED_MARK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

const TITLE: &str = "Names";

/// Renders the name rows in list order with the cursor row highlighted and
/// every row matching the selection marked.
pub struct NameListView<'a> {
    state: &'a NameListState,
    focused: bool,
}

impl<'a> NameListView<'a> {
    pub fn new(state: &'a NameListState) -> Self {
        Self {
            state,
            focused: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = self
            .state
            .names
            .iter()
            .map(|name| {
                let mark = if self.state.is_selected(name) {
                    Span::styled("● ", Style::default().fg(SELECTED_MARK))
                } else {
                    Span::raw("  ")
                };
                ListItem::new(Line::from(vec![
                    mark,
                    Span::styled(name.as_str(), Style::default().fg(HEADER_TEXT)),
                ]))
            })
            .collect();

        let border = if self.focused {
            FOCUSED_BORDER
        } else {
            GLOBAL_BORDER
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .title(Span::styled(TITLE, Style::default().fg(ACCENT)))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .highlight_style(
                Style::default()
                    .bg(CURSOR_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            );

        let mut rows = ListState::default();
        if !self.state.names.is_empty() {
            rows.select(Some(self.state.cursor));
        }
        frame.render_stateful_widget(list, area, &mut rows);
    }
}
