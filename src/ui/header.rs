use crate::config::NavigationMode;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    mode: NavigationMode,
}

impl Header {
    pub fn new(mode: NavigationMode) -> Self {
        Self { mode }
    }

    /// `breadcrumb` names the route on top of the list, if any.
    pub fn widget(&self, breadcrumb: Option<&str>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("navlist", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("mode: {}", self.mode.label()), text_style),
        ];
        if let Some(crumb) = breadcrumb {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(format!("Names › {}", crumb), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
