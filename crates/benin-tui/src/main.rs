use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

use benin_tui::utils::{init_logging, ConfigManager};
use benin_tui::{run_tui, App, CrosstermEventSource};

fn main() -> Result<()> {
    let manager = ConfigManager::load().context("loading benin-tui configuration")?;
    let config = manager.config();
    init_logging(&config.logging)?;
    tracing::info!(data_dir = %config.data.dir, "starting benin-tui");

    let mut stdout = io::stdout();
    if !stdout.is_terminal() {
        // Piped output: print the landing view once.
        print!("{}", App::from_config(config).render());
        return Ok(());
    }

    let mut app = App::from_config(config).with_ansi(true);
    if let Ok((width, height)) = terminal::size() {
        app.resize(width, height);
    }

    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = run_tui(&mut stdout, &mut CrosstermEventSource, &mut app);

    disable_raw_mode()?;
    execute!(stdout, Show, LeaveAlternateScreen)?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "benin-tui exited with an error");
    }
    result
}
