//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::TuiApp;
use crate::board::draw_board;

/// Frame interval while waiting for input; drives the confetti.
const TICK: Duration = Duration::from_millis(80);

const STATUS_HINT: &str = "1-0/click:hold  Space:roll  n:new game  ?:help  q:quit";

/// Launch the TUI application.
pub fn run(mut app: TuiApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    tracing::debug!("terminal ui started");
    let result = run_loop(&mut terminal, &mut app);
    tracing::debug!(
        rolls = app.game.roll_count(),
        won = app.game.is_won(),
        "terminal ui closed"
    );

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop.
fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut TuiApp) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(TICK).map_err(|e| format!("event error: {e}"))? {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            handle_event(app, event);
        } else {
            app.tick();
        }
    }
}

/// Handle a crossterm event.
fn handle_event(app: &mut TuiApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
        Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
            app.handle_mouse(mouse)
        }
        _ => {}
    }
}

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Board
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    if app.screen != frame.area() && app.confetti.is_active() {
        app.confetti.start(frame.area());
    }
    app.screen = frame.area();

    app.layout = Some(draw_board(frame, app, chunks[0]));

    if app.game.is_won() {
        frame.render_widget(&app.confetti, frame.area());
    }

    let status =
        Paragraph::new(STATUS_HINT).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[1]);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}
