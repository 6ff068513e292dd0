use crate::config::Config;
use crate::store::StoreHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::layout::Rect;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Runs the interactive UI until the user quits.
pub fn run(config: &Config, store: StoreHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(config, store);
    let events = EventHandler::new(tick_rate);

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        resize_body(&mut app, cols, rows);
    }
    tracing::info!(
        mode = app.mode().label(),
        names = app.names().len(),
        "UI started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => resize_body(&mut app, cols, rows),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(events);
    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}

fn resize_body(app: &mut App, cols: u16, rows: u16) {
    let body = body_rect(Rect::new(0, 0, cols, rows));
    app.on_resize(body.width.max(1), body.height.max(1));
}
