//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the home screen,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Data Flow
//!
//! - Key events become actions and go through `update()`.
//! - Feed fetches run in a spawned task and post `FeedsSettled` back over the
//!   action channel. Navigation intents and notices arrive the same way.
//! - Store changes are picked up through watch receivers; a change forces a
//!   redraw. Otherwise the loop only redraws on input.

mod bridge;
mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tokio::sync::watch;

use crate::api::{Recipe, RecipeApi};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Route};
use crate::core::store::RecipeStore;
use crate::feed::FeedKind;
use crate::tui::component::EventHandler;
use crate::tui::components::{SearchBar, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

pub use bridge::{ChannelNavigator, ChannelNotifier};

/// Which part of the home screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Popular,
    Newest,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Popular,
            Focus::Popular => Focus::Newest,
            Focus::Newest => Focus::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::Newest,
            Focus::Popular => Focus::Search,
            Focus::Newest => Focus::Popular,
        }
    }

    fn feed(self) -> Option<FeedKind> {
        match self {
            Focus::Search => None,
            Focus::Popular => Some(FeedKind::Popular),
            Focus::Newest => Some(FeedKind::Newest),
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_bar: SearchBar,
    pub focus: Focus,
    pub popular_selected: usize,
    pub newest_selected: usize,
    /// Render snapshots, refreshed when a store signals a change.
    pub popular: Vec<Recipe>,
    pub newest: Vec<Recipe>,
    popular_rx: watch::Receiver<Vec<Recipe>>,
    newest_rx: watch::Receiver<Vec<Recipe>>,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let popular_rx = app.screen.popular().subscribe();
        let newest_rx = app.screen.newest().subscribe();
        Self {
            search_bar: SearchBar::new(),
            focus: Focus::Search,
            popular_selected: 0,
            newest_selected: 0,
            popular: app.screen.popular().snapshot(),
            newest: app.screen.newest().snapshot(),
            popular_rx,
            newest_rx,
        }
    }

    /// Resets presentation state after the home screen was rebuilt.
    pub fn attach(&mut self, app: &App) {
        *self = Self::new(app);
    }

    /// Pulls new store contents into the render snapshots. Returns true when
    /// anything changed.
    pub fn sync_feeds(&mut self) -> bool {
        let mut changed = false;
        if take_change(&mut self.popular_rx, &mut self.popular) {
            self.popular_selected = clamp_index(self.popular_selected, self.popular.len());
            changed = true;
        }
        if take_change(&mut self.newest_rx, &mut self.newest) {
            self.newest_selected = clamp_index(self.newest_selected, self.newest.len());
            changed = true;
        }
        changed
    }

    fn selected_mut(&mut self, kind: FeedKind) -> (&mut usize, usize) {
        match kind {
            FeedKind::Popular => (&mut self.popular_selected, self.popular.len()),
            FeedKind::Newest => (&mut self.newest_selected, self.newest.len()),
        }
    }
}

fn take_change(rx: &mut watch::Receiver<Vec<Recipe>>, snapshot: &mut Vec<Recipe>) -> bool {
    if rx.has_changed().unwrap_or(false) {
        *snapshot = rx.borrow_and_update().clone();
        true
    } else {
        false
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

/// Maps a terminal event to a core action, updating TUI-local state on the way.
pub fn handle_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // The modal swallows everything except its own dismissal
    if app.notice.is_some() {
        return match event {
            TuiEvent::Submit | TuiEvent::Escape => Some(Action::DismissNotice),
            _ => None,
        };
    }

    if !matches!(app.current_route(), Route::Home) {
        return match event {
            TuiEvent::Escape => Some(Action::Back),
            _ => None,
        };
    }

    match event {
        TuiEvent::Reload => return Some(Action::Reload),
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            return None;
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev();
            return None;
        }
        _ => {}
    }

    let Some(kind) = tui.focus.feed() else {
        return search_event(tui, &event);
    };

    match event {
        TuiEvent::CursorLeft => {
            let (selected, _) = tui.selected_mut(kind);
            *selected = selected.saturating_sub(1);
            None
        }
        TuiEvent::CursorRight => {
            let (selected, len) = tui.selected_mut(kind);
            *selected = clamp_index(*selected + 1, len);
            None
        }
        TuiEvent::Submit => {
            let (selected, _) = tui.selected_mut(kind);
            Some(Action::OpenRecipe {
                feed: kind,
                index: *selected,
            })
        }
        TuiEvent::Escape => {
            tui.focus = Focus::Search;
            None
        }
        // Typing jumps back to the search bar and keeps the keystroke
        TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
            tui.focus = Focus::Search;
            search_event(tui, &event)
        }
        _ => None,
    }
}

fn search_event(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match tui.search_bar.handle_event(event)? {
        SearchEvent::Changed(text) => Some(Action::QueryChanged(text)),
        SearchEvent::Submit => Some(Action::SubmitSearch),
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

/// Spawns the current screen's feed activation. The task reports back with
/// `FeedsSettled`; nothing waits on it here.
fn spawn_activation(app: &App, tx: mpsc::Sender<Action>) {
    let aggregator = app.aggregator();
    let activation = app.activation;
    info!("Spawning feed activation {}", activation);
    tokio::spawn(async move {
        let report = aggregator.activate().await;
        if tx.send(Action::FeedsSettled { activation, report }).is_err() {
            warn!("Failed to send FeedsSettled: receiver dropped");
        }
    });
}

pub fn run(config: ResolvedConfig, api: Arc<dyn RecipeApi>) -> std::io::Result<()> {
    // Channel for actions from background tasks, navigators, and notifiers
    let (tx, rx) = mpsc::channel();

    // Lives as long as the process; every home screen shares it
    let popular = RecipeStore::new();
    let mut app = App::new(
        api,
        config.feed,
        popular,
        Arc::new(ChannelNavigator::new(tx.clone())),
        Arc::new(ChannelNotifier::new(tx.clone())),
    );
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    spawn_activation(&app, tx.clone());

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        if tui.sync_feeds() || app.feeds_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short timeout while the spinner runs, long when idle
        let timeout = if app.feeds_loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = handle_event(&app, &mut tui, event) else {
                continue;
            };
            match update(&mut app, action) {
                Effect::Quit => break 'main,
                Effect::ActivateFeeds => {
                    tui.attach(&app);
                    spawn_activation(&app, tx.clone());
                }
                Effect::None => {}
            }
        }

        // Actions posted by background tasks, navigators, and notifiers
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => break 'main,
                Effect::ActivateFeeds => {
                    tui.attach(&app);
                    spawn_activation(&app, tx.clone());
                }
                Effect::None => {}
            }
        }
    }

    app.screen.teardown();
    ratatui::restore();
    info!("Recipe feed shut down");
    Ok(())
}
