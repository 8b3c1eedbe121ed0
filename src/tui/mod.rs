//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the bound
//! table, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! intention is that a different adapter (GUI, web) could replace it without
//! touching `core` or `model`.
//!
//! ## View-State Stack
//!
//! `TuiState.views` holds one [`TableViewState`] per screen on the nav
//! stack, pushed and popped in lockstep with it via the [`Effect`] returned
//! from `update()`. Popping back to a parent screen therefore restores its
//! cursor position and control values.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading** (source fetch in flight): draws every ~80ms so the spinner
//!   animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::components::{TableViewEvent, TableViewState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

pub use crate::tui::components::{CellContext, CellRenderer, RendererMap};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigate rows with arrow keys, activate with Enter.
    Browse,
    /// Text editing in a text-input cell. Enter commits, Esc cancels.
    Edit,
}

/// TUI-specific presentation state (not part of core binding logic).
pub struct TuiState {
    /// One view state per screen on the nav stack, kept in lockstep.
    pub views: Vec<TableViewState>,
    pub mode: InputMode,
    /// Custom cell renderers, resolved by `CellStyle::Custom` key.
    pub renderers: RendererMap,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self::with_renderers(app, RendererMap::new())
    }

    pub fn with_renderers(app: &App, renderers: RendererMap) -> Self {
        Self {
            views: vec![TableViewState::new(app.nav.current())],
            mode: InputMode::Browse,
            renderers,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Run the TUI until the user quits. Must be called inside a tokio runtime:
/// source fetches are spawned onto it fire-and-forget, and their results
/// come back through the action channel.
pub fn run(mut app: App, renderers: RendererMap) -> std::io::Result<()> {
    let mut tui = TuiState::with_renderers(&app, renderers);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // An app built with App::loading starts with its fetch already due.
    if app.is_loading {
        spawn_load(&app, tx.clone());
    }

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    loop {
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 8.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while the spinner runs, long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Modal event dispatch: the current screen's view state
            // interprets the key.
            let view_event = match tui.mode {
                InputMode::Browse => tui.views.last_mut().and_then(|v| v.handle_browse(&event)),
                InputMode::Edit => tui.views.last_mut().and_then(|v| v.handle_edit(&event)),
            };
            let Some(view_event) = view_event else {
                continue;
            };

            let action = match view_event {
                TableViewEvent::Activated(path) => Some(Action::Activate(path)),
                TableViewEvent::Toggled { path, on } => Some(Action::ToggleFlipped { path, on }),
                TableViewEvent::EditStarted(path) => {
                    debug!("edit started at {:?}", path);
                    tui.mode = InputMode::Edit;
                    None
                }
                TableViewEvent::EditCommitted { path, text } => {
                    tui.mode = InputMode::Browse;
                    Some(Action::TextCommitted { path, text })
                }
                TableViewEvent::EditCancelled => {
                    tui.mode = InputMode::Browse;
                    None
                }
                TableViewEvent::Back => Some(Action::Back),
                TableViewEvent::Reload => Some(Action::Reload),
                TableViewEvent::Quit => Some(Action::Quit),
            };

            if let Some(action) = action {
                let effect = update(&mut app, action);
                if handle_effect(&app, &mut tui, &tx, effect) {
                    should_quit = true;
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (source fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if handle_effect(&app, &mut tui, &tx, effect) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Perform the side effect `update()` asked for. Returns true on quit.
fn handle_effect(app: &App, tui: &mut TuiState, tx: &mpsc::Sender<Action>, effect: Effect) -> bool {
    match effect {
        Effect::Pushed => {
            tui.views.push(TableViewState::new(app.nav.current()));
            false
        }
        Effect::Popped => {
            tui.views.pop();
            false
        }
        Effect::Reset => {
            tui.views = vec![TableViewState::new(app.nav.current())];
            tui.mode = InputMode::Browse;
            false
        }
        Effect::SpawnLoad => {
            spawn_load(app, tx.clone());
            false
        }
        Effect::Quit => true,
        Effect::None => false,
    }
}

/// Fire-and-forget source fetch. The outcome is marshaled back onto the UI
/// loop through the action channel before any state mutation.
fn spawn_load(app: &App, tx: mpsc::Sender<Action>) {
    let Some(source) = app.source.clone() else {
        return;
    };
    info!("Spawning table load from {}", source.name());
    tokio::spawn(async move {
        let action = match source.load().await {
            Ok(table) => Action::TableLoaded(table),
            Err(e) => Action::LoadFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send load result: receiver dropped");
        }
    });
}
