use ratatui::layout::{Constraint, Direction, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Splits the frame into header, body and footer. The body takes whatever
/// the fixed-height bars leave over.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        height: header_height,
        ..area
    };
    let footer = Rect {
        y: area.y + area.height.saturating_sub(footer_height),
        height: footer_height,
        ..area
    };
    let body = Rect {
        y: area.y + header_height,
        height: area.height.saturating_sub(header_height + footer_height),
        ..area
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// List column on the left, detail column on the right.
pub fn split_columns(body: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(body);
    (columns[0], columns[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_vertically() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header, Rect::new(0, 0, 80, 3));
        assert_eq!(body, Rect::new(0, 3, 80, 18));
        assert_eq!(footer, Rect::new(0, 21, 80, 3));
    }

    #[test]
    fn tiny_terminal_gives_empty_body() {
        let body = body_rect(Rect::new(0, 0, 10, 4));
        assert_eq!(body.height, 0);
    }

    #[test]
    fn split_columns_cover_body() {
        let body = Rect::new(0, 3, 100, 18);
        let (list, detail) = split_columns(body);
        assert_eq!(list.x, 0);
        assert_eq!(list.width + detail.width, 100);
        assert_eq!(detail.x, list.width);
    }
}
