//! Main TUI runner - entry point and event loop
//!
//! The workbench runs on the engine task. This loop owns the terminal and
//! the UI state: it routes host requests into dialogs, folds new view
//! snapshots into the state, draws, and turns key presses into commands.

use propdesk_app::handler::{self, UpdateAction};
use propdesk_app::host::{ChannelHost, HostRequest};
use propdesk_app::message::Message;
use propdesk_app::state::AppState;
use propdesk_app::{signals, Command, Engine, Settings, Workbench, WorkbenchView};
use propdesk_core::prelude::*;
use tokio::sync::{mpsc, watch};

use crate::{event, render, terminal};

/// Capacity of the host request and external message channels
const CHANNEL_CAPACITY: usize = 64;

/// Run the TUI until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let (host_tx, mut host_rx) = mpsc::channel::<HostRequest>(CHANNEL_CAPACITY);
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
    signals::spawn_signal_handler(msg_tx);

    let engine = Engine::spawn(Workbench::new(ChannelHost::new(host_tx), settings.clone()));
    let mut views = engine.subscribe();
    let mut state = AppState::with_settings(settings);

    let mut term = terminal::init()?;

    // Start on the directory prompt instead of an empty screen
    process_message(&mut state, Message::Authorize, &engine);

    let result = run_loop(
        &mut term,
        &mut state,
        &engine,
        &mut views,
        &mut host_rx,
        &mut msg_rx,
    );

    terminal::restore();

    // Unanswered dialogs must resolve before the engine can finish its command
    drop(host_rx);
    drop(state);
    engine.shutdown().await;
    info!("propdesk stopped");

    result
}

/// Main event loop
fn run_loop(
    term: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    engine: &Engine,
    views: &mut watch::Receiver<WorkbenchView>,
    host_rx: &mut mpsc::Receiver<HostRequest>,
    msg_rx: &mut mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, engine);
        }

        while let Ok(request) = host_rx.try_recv() {
            handler::handle_host_request(state, request);
        }

        match views.has_changed() {
            Ok(true) => {
                let view = views.borrow_and_update().clone();
                process_message(state, Message::ViewUpdated(Box::new(view)), engine);
            }
            Ok(false) => {}
            Err(_) => {
                // Engine task is gone; nothing left to drive
                if !views.borrow().quit {
                    warn!("Engine stopped unexpectedly, leaving the UI");
                }
                state.force_quit();
                break;
            }
        }

        term.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, engine);
        }
    }

    Ok(())
}

/// Process a message through the TEA update loop
fn process_message(state: &mut AppState, message: Message, engine: &Engine) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(state, action, engine);
        }

        msg = result.message;
    }
}

fn handle_action(state: &mut AppState, action: UpdateAction, engine: &Engine) {
    match action {
        UpdateAction::Send(command) => send_command(state, engine, command),
    }
}

fn send_command(state: &mut AppState, engine: &Engine, command: Command) {
    debug!("Sending {:?}", command);
    if let Err(e) = engine.send(command) {
        error!("Failed to send command to engine: {}", e);
        // No revision will arrive for it; don't stay busy
        state.sent_commands = state.sent_commands.saturating_sub(1);
    }
}
