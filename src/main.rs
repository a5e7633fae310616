//! Terminal front end.
//!
//! Reads one command per line from stdin, feeds the resulting events through
//! the runtime, and prints the gallery view after every change. Fetch and
//! download completions arrive concurrently with user input; a half-second
//! tick expires notifications.
//!
//! ```text
//! stdin lines ──┐
//! completions ──┼──► Runtime::dispatch ──► render(view model) ──► stdout
//! tick ─────────┘
//! ```
//!
//! Type `help` for the command list.

#![allow(clippy::multiple_crate_versions)]

use chrono::Utc;
use lumina::infrastructure::get_config_file;
use lumina::input::{parse_line, Command, HELP};
use lumina::observability::init_tracing;
use lumina::{initialize, AppState, Config, Event, Runtime};
use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const TICK: Duration = Duration::from_millis(500);

#[tokio::main(flavor = "current_thread")]
async fn main() -> lumina::Result<()> {
    let config = Config::load(get_config_file().as_deref())?;
    init_tracing(&config);

    if config.api_key.is_empty() {
        eprintln!("warning: no API key configured; set PEXELS_API_KEY or api_key in the config file");
    }

    let (mut state, mut runtime) = initialize(&config);
    let mut stdout = io::stdout();
    let mut shown = Shown::default();

    runtime.dispatch(&mut state, Event::Init)?;
    draw(&state, &mut runtime, &mut shown, &mut stdout)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(TICK);

    loop {
        let render = tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line(&line) {
                    Ok(Some(Command::Event(event))) => runtime.dispatch(&mut state, event)?,
                    Ok(Some(Command::Help)) => {
                        writeln!(stdout, "{HELP}")?;
                        false
                    }
                    Ok(None) => false,
                    Err(e) => {
                        writeln!(stdout, "! {e}")?;
                        false
                    }
                }
            }
            Some(event) = runtime.next_event() => runtime.dispatch(&mut state, event)?,
            _ = ticker.tick() => {
                runtime.notifications_mut().expire(Utc::now());
                false
            }
        };

        if runtime.should_quit() {
            break;
        }
        if render {
            draw(&state, &mut runtime, &mut shown, &mut stdout)?;
        } else {
            print_new_notifications(&runtime, &mut shown, &mut stdout)?;
        }
    }

    tracing::debug!("lumina exiting");
    Ok(())
}

/// Highest notification id already printed.
#[derive(Debug, Default)]
struct Shown {
    last_notification: u64,
}

fn draw(
    state: &AppState,
    runtime: &mut Runtime,
    shown: &mut Shown,
    out: &mut impl Write,
) -> io::Result<()> {
    if runtime.take_scroll_to_top() {
        // Clear the screen and home the cursor.
        write!(out, "\x1b[2J\x1b[H")?;
    }
    lumina::ui::render(&state.compute_viewmodel(), out)?;
    print_new_notifications(runtime, shown, out)
}

fn print_new_notifications(
    runtime: &Runtime,
    shown: &mut Shown,
    out: &mut impl Write,
) -> io::Result<()> {
    let fresh: Vec<_> = runtime
        .notifications()
        .active()
        .iter()
        .filter(|n| n.id > shown.last_notification)
        .cloned()
        .collect();

    if let Some(last) = fresh.last() {
        shown.last_notification = last.id;
        lumina::ui::render_notifications(&fresh, out)?;
    }
    out.flush()
}
