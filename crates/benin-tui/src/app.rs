use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use benin_io::DatasetStore;
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use tracing::debug;

use crate::panes::{build_shell, View};
use crate::ui::{AppShell, PaneContext, Theme};
use crate::utils::logging::log_view_selected;
use crate::utils::AppConfig;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// What the driver loop should do after an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Redraw,
    Quit,
}

/// Dashboard state: the shell and its active view.
pub struct App {
    shell: AppShell,
}

impl App {
    pub fn new(context: PaneContext) -> Self {
        Self {
            shell: build_shell(context),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let store = Arc::new(DatasetStore::new(config.data.dir_path()));
        let context = PaneContext::new(store, config.data.assets_path())
            .with_theme(Theme::for_mode(config.theme.mode))
            .with_chart_height(config.ui.chart_height);
        Self::new(context).with_viewport(config.ui.width, config.ui.height)
    }

    pub fn with_viewport(mut self, width: u16, height: u16) -> Self {
        self.resize(width, height);
        self
    }

    pub fn with_ansi(mut self, enabled: bool) -> Self {
        self.shell = self.shell.with_ansi(enabled);
        self
    }

    pub fn shell(&self) -> &AppShell {
        &self.shell
    }

    pub fn active_view(&self) -> Option<View> {
        self.shell.active_id().and_then(View::from_id)
    }

    /// Make `view` the active one. Other views are left untouched.
    pub fn select(&mut self, view: View) -> bool {
        let selected = self.shell.select_by_id(view.id());
        if selected {
            log_view_selected(view.id());
        }
        selected
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.shell.resize(width, height);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Control::Quit,
            KeyCode::Char('q') | KeyCode::Esc => Control::Quit,
            KeyCode::Char('r') => Control::Redraw,
            KeyCode::Down | KeyCode::Char('j') => {
                self.shell.next();
                self.log_active();
                Control::Redraw
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.shell.previous();
                self.log_active();
                Control::Redraw
            }
            KeyCode::Char(c) if self.shell.select_menu_item(c) => {
                self.log_active();
                Control::Redraw
            }
            _ => Control::Continue,
        }
    }

    pub fn render(&self) -> String {
        self.shell.render()
    }

    fn log_active(&self) {
        if let Some(id) = self.shell.active_id() {
            log_view_selected(id);
        }
    }
}

/// Input seam for the driver loop, so it can run against scripted events.
pub trait EventSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Draw, then redraw after every input that changes the frame, until quit.
pub fn run_tui<W, E>(out: &mut W, event_source: &mut E, app: &mut App) -> Result<()>
where
    W: Write,
    E: EventSource,
{
    draw(out, app)?;
    loop {
        if !event_source.poll(POLL_INTERVAL)? {
            continue;
        }
        match event_source.read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match app.handle_key(key) {
                Control::Quit => break,
                Control::Redraw => draw(out, app)?,
                Control::Continue => {}
            },
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                app.resize(width, height);
                draw(out, app)?;
            }
            _ => {}
        }
    }
    Ok(())
}

fn draw<W: Write>(out: &mut W, app: &App) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    for line in app.render().lines() {
        // Raw mode: no implicit carriage return.
        write!(out, "{line}\r\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn app() -> App {
        let dir = tempdir().unwrap();
        let store = Arc::new(DatasetStore::new(dir.path()));
        App::new(PaneContext::new(store, dir.path()).with_theme(Theme::new()))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_initial_view_is_home() {
        assert_eq!(app().active_view(), Some(View::Home));
    }

    #[test]
    fn test_hotkeys_select_views() {
        let mut app = app();
        assert_eq!(app.handle_key(key(KeyCode::Char('3'))), Control::Redraw);
        assert_eq!(app.active_view(), Some(View::Pib));
        assert_eq!(app.handle_key(key(KeyCode::Char('9'))), Control::Redraw);
        assert_eq!(app.active_view(), Some(View::Trivia));
        assert_eq!(app.handle_key(key(KeyCode::Char('0'))), Control::Continue);
        assert_eq!(app.active_view(), Some(View::Trivia));
    }

    #[test]
    fn test_select_lands_on_the_view_id() {
        let mut app = app();
        for view in View::ALL.into_iter().rev() {
            assert!(app.select(view));
            assert_eq!(app.shell.active_id(), Some(view.id()));
        }
    }

    #[test]
    fn test_arrows_wrap_around() {
        let mut app = app();
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.active_view(), Some(View::Trivia));
        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.active_view(), Some(View::Home));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Control::Quit);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Control::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Control::Quit
        );
        assert_eq!(app.handle_key(key(KeyCode::Char('r'))), Control::Redraw);
    }
}
