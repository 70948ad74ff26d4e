use std::io::{self, stdout, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use batcalc::app::LogicThread;
use batcalc::config::Config;
use batcalc::headless::eval_keys;
use batcalc::render::RenderState;
use batcalc::{clog, ui, Result};

const FRAME_DURATION: Duration = Duration::from_micros(16_666); // 60fps

/// batcalc - a Gotham-themed terminal calculator
#[derive(Parser, Debug)]
#[command(name = "batcalc")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "ENVIRONMENT:\n    BATCALC_DEBUG=1     Enable debug logging (alternative to --debug)"
)]
pub struct Cli {
    /// Enable debug logging (writes to ~/.batcalc/batcalc.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Disable sparkles, celebrations and the bounce on clear
    #[arg(long)]
    pub no_effects: bool,

    /// Ring the terminal bell on every keystroke
    #[arg(short = 's', long)]
    pub sound: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Evaluate a key sequence without the TUI, e.g. `batcalc eval "2+3*4="`
    Eval {
        /// Keys as typed on the calculator
        keys: String,

        /// Print a JSON report instead of the display text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    batcalc::log::init_with_debug(cli.debug);

    let mut config = Config::load()?;
    if cli.no_effects {
        config.effects = false;
    }
    if cli.sound {
        config.sound = true;
    }

    if let Some(Command::Eval { keys, json }) = cli.command {
        return run_eval(&keys, json, &config);
    }

    if cli.debug {
        clog!("batcalc starting (debug mode enabled)");
    } else {
        clog!("batcalc starting");
    }

    let shutdown = Arc::new(AtomicBool::new(false));
    let (state_tx, state_rx) = crossbeam_channel::bounded::<RenderState>(1);

    let shutdown_clone = shutdown.clone();
    let logic_handle = thread::spawn(move || LogicThread::run(config, state_tx, shutdown_clone));

    let mut terminal = setup_terminal()?;
    let result = render_loop(&mut terminal, state_rx, &shutdown);

    shutdown.store(true, Ordering::SeqCst);
    let logic_result = logic_handle.join();
    restore_terminal(&mut terminal)?;
    result?;
    match logic_result {
        Ok(r) => r,
        Err(_) => {
            batcalc::log::error("Logic thread panicked");
            Ok(())
        }
    }
}

fn run_eval(keys: &str, json: bool, config: &Config) -> Result<()> {
    let report = eval_keys(keys, config.scientific_threshold);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for error in &report.errors {
            eprintln!("Error: {}", error);
        }
        println!("{}", report.display);
    }
    Ok(())
}

fn render_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state_rx: Receiver<RenderState>,
    shutdown: &AtomicBool,
) -> Result<()> {
    let mut state = RenderState::default();
    let mut last_version: u64 = 0;
    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        match state_rx.try_recv() {
            Ok(s) => {
                dirty = dirty || s.version != last_version;
                state = s;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        if last_frame.elapsed() < FRAME_DURATION {
            thread::sleep(Duration::from_micros(500));
            continue;
        }
        last_frame = Instant::now();

        if dirty {
            terminal.draw(|f| ui::draw(f, &state))?;
            last_version = state.version;
            dirty = false;
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(disable_raw_mode()?)
}
