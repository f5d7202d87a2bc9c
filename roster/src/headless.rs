//! Headless mode for the roster.
//!
//! A line-oriented interface over stdin/stdout, designed for scripting and
//! automated testing. Confirmation prompts are answered on the next line.

use std::io::{self, BufRead, Write};

use roster_core::{HeadlessSession, RosterConfig};

/// Run the roster in headless mode.
pub fn run_headless(config: &RosterConfig) -> io::Result<()> {
    let mut session = HeadlessSession::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    for line in session.banner() {
        println!("{line}");
    }
    stdout.flush()?;

    while !session.is_finished() {
        let line = match lines.next() {
            Some(Ok(l)) => l,
            Some(Err(e)) => {
                eprintln!("Error reading input: {e}");
                break;
            }
            None => break,
        };

        let mut ask = |prompt: &str| -> bool {
            print!("? {prompt} [y/N] ");
            let _ = io::stdout().flush();
            match lines.next() {
                Some(Ok(answer)) => {
                    let answer = answer.trim();
                    println!();
                    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
                }
                // End of input declines
                _ => false,
            }
        };

        for out in session.handle_line(&line, &mut ask) {
            println!("{out}");
        }
        stdout.flush()?;
    }

    Ok(())
}
