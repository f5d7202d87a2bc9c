//! Guild roster TUI application.
//!
//! A vim-style terminal interface for managing a guild of adventurers.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for scripting:
//!
//! ```bash
//! printf 'add Frodo | Ladino | 3\nlist\nq\n' | cargo run -p roster -- --headless --yes
//! ```

mod app;
mod events;
mod form;
mod headless;
mod logging;
mod ui;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use roster_core::{RosterConfig, Seed};
use std::io::{self, stdout};
use std::time::Duration;
use tracing::info;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --help
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let config = match RosterConfig::from_env() {
        Ok(config) => apply_args(&args, config),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Check for --headless mode
    let headless = args.iter().any(|a| a == "--headless");
    logging::init(headless)?;
    info!(?config, headless, "starting roster");

    if headless {
        return headless::run_headless(&config).map_err(|e| e.into());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(config.build_roster(), &config);
    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

/// Command line flags override the environment
fn apply_args(args: &[String], mut config: RosterConfig) -> RosterConfig {
    if args.iter().any(|a| a == "--empty") {
        config = config.with_seed(Seed::Empty);
    }
    if args.iter().any(|a| a == "--confirm-add") {
        config = config.with_add_confirmation(true);
    }
    if args.iter().any(|a| a == "--yes" || a == "-y") {
        config = config
            .with_confirmations(false)
            .with_add_confirmation(false);
    }
    config
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|f| render(f, &app))?;

        // Poll with a timeout so expired notifications disappear
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;

            match handle_event(&mut app, ev) {
                EventResult::Quit => {
                    return Ok(());
                }
                EventResult::NeedsRedraw | EventResult::Continue => {
                    // Just continue the loop
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn print_help() {
    println!("Guild Roster - manage a guild of adventurers");
    println!();
    println!("USAGE:");
    println!("  roster [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
    println!("  --headless       Run in headless mode (text-only, no TUI)");
    println!("  --empty          Start with an empty roster");
    println!("  -y, --yes        Never ask for confirmation");
    println!("  --confirm-add    Ask before adding a character");
    println!();
    println!("ENVIRONMENT:");
    println!("  ROSTER_SEED        sample | empty (default: sample)");
    println!("  ROSTER_NOTIFY_MS   Notification lifetime in ms (default: 3000)");
    println!("  ROSTER_CONFIRM     true | false (default: true)");
    println!("  ROSTER_LOG         Append logs to this file");
    println!("  ROSTER_LOG_LEVEL   Log filter, e.g. debug or roster_core=trace");
    println!();
    println!("EXAMPLES:");
    println!("  roster                                 # Interactive TUI mode");
    println!("  roster --headless                      # Headless with the sample guild");
    println!("  roster --headless --empty --yes < script.txt");
}
