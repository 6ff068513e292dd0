use crate::ui::app::{App, Screen};
use crate::ui::detail::DetailView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_columns};
use crate::ui::list::NameListView;
use crate::ui::navigation::Route;
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Draws one frame. The body is composed from the list and detail
/// presenters according to the app's current screen.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let screen = app.visible_screen();

    let breadcrumb = match app.navigation().top() {
        Some(Route::Detail { name }) => Some(name.as_str()),
        None => None,
    };
    frame.render_widget(Header::new(app.mode()).widget(breadcrumb), header);
    frame.render_widget(Clear, body);

    let detail = DetailView::new(app.detail_selection(), app.store());
    match screen {
        Screen::List => NameListView::new(app.list()).render(frame, body),
        Screen::Detail => detail.render(frame, body),
        Screen::Split => {
            let (list_area, detail_area) = split_columns(body);
            NameListView::new(app.list()).render(frame, list_area);
            detail.render(frame, detail_area);
        }
    }

    frame.render_widget(Footer::new(screen).widget(footer), footer);
}
