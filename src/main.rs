use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use touchpong::cli::{parse_args, print_usage};
use touchpong::config::load_config;
use touchpong::control::TerminalGestures;
use touchpong::debug;
use touchpong::game::Table;
use touchpong::session::Session;
use touchpong::ui::BrailleRenderer;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("touchpong");

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(program);
            std::process::exit(1);
        }
    };
    if options.help {
        print_usage(program);
        return Ok(());
    }

    debug::init(options.debug).context("failed to initialize debug log")?;

    let mut config = load_config().context("failed to load configuration")?;
    options.apply(&mut config);
    info!(?config, "configuration loaded");

    let table = Table::new(&config.physics, config.display.target_fps);
    let renderer = BrailleRenderer::new(&config.display);
    let mut session = Session::new(table, renderer, &config);
    let mut gestures = TerminalGestures::new(&config.keybindings);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = session.run(&mut terminal, &mut gestures);

    // Restore the terminal even if the session failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}
