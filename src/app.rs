use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;
use crossterm::event::{self, Event};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::actors::{ActorHandle, TickerActor};
use crate::config::Config;
use crate::render::RenderState;
use crate::tea::{update, Command, Message, Model};
use crate::{clog_debug, clog_warn, Result};

const MAX_BG_MESSAGES: usize = 50;

pub struct LogicThread;

impl LogicThread {
    pub fn run(config: Config, state_tx: Sender<RenderState>, shutdown: Arc<AtomicBool>) -> Result<()> {
        Runtime::new()?.block_on(Self::run_async(config, state_tx, shutdown))
    }

    async fn run_async(
        config: Config,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        clog_debug!(
            "LogicThread::run_async effects={} sound={}",
            config.effects,
            config.sound
        );
        let tick_interval = config.tick_interval();
        let mut model = Model::new(config);

        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Message>();
        let actors = spawn_actors(msg_tx, tick_interval);

        send_state(&state_tx, &model);

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            // Keyboard input (priority)
            while event::poll(Duration::ZERO)? {
                let msg = match event::read()? {
                    Event::Key(key) => Message::Key(key),
                    Event::Resize(w, h) => Message::Resize(w, h),
                    _ => continue,
                };

                if dispatch(&mut model, msg) {
                    shutdown.store(true, Ordering::Relaxed);
                    shutdown_actors(&actors);
                    return Ok(());
                }

                if model.dirty {
                    send_state(&state_tx, &model);
                    model.dirty = false;
                }
            }

            // Background messages (bounded)
            for _ in 0..MAX_BG_MESSAGES {
                let Ok(msg) = msg_rx.try_recv() else { break };
                if dispatch(&mut model, msg) {
                    shutdown.store(true, Ordering::Relaxed);
                    shutdown_actors(&actors);
                    return Ok(());
                }
            }

            if model.dirty {
                send_state(&state_tx, &model);
                model.dirty = false;
            }

            tokio::time::sleep(Duration::from_micros(500)).await;
        }

        shutdown_actors(&actors);
        Ok(())
    }
}

/// Run one message through `update` and execute the resulting commands.
/// Returns true when the application should quit.
fn dispatch(model: &mut Model, msg: Message) -> bool {
    update(model, msg).into_iter().any(execute_command)
}

fn execute_command(cmd: Command) -> bool {
    match cmd {
        Command::Bell => {
            let mut stdout = std::io::stdout();
            if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
                clog_warn!("Bell failed: {}", e);
            }
        }

        Command::Quit => {
            clog_debug!("Command::Quit");
            return true;
        }
    }

    false
}

fn send_state(state_tx: &Sender<RenderState>, model: &Model) {
    let _ = state_tx.try_send(model.snapshot());
}

fn spawn_actors(msg_tx: mpsc::UnboundedSender<Message>, tick_interval: Duration) -> Vec<ActorHandle> {
    clog_debug!("Spawning actors");
    vec![TickerActor::new(msg_tx, tick_interval).spawn()]
}

fn shutdown_actors(actors: &[ActorHandle]) {
    clog_debug!("Shutting down {} actors", actors.len());
    for actor in actors {
        actor.shutdown();
    }
}
