//! # Core Application Logic
//!
//! Home-screen state and the rules that change it. It knows nothing about
//! any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (screen data)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Search dispatch      │
//!                    └───────────┬─────────────┘
//!                                │
//!              ┌─────────────────┴─────────────────┐
//!              ▼                                   ▼
//!       ┌────────────┐                      ┌────────────┐
//!       │    TUI     │                      │    Feed    │
//!       │  Adapter   │                      │ aggregator │
//!       │ (ratatui)  │                      │  (reqwest) │
//!       └────────────┘                      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `App` and `HomeScreen`, all screen state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`store`]: replace-only recipe lists and the liveness flag
//! - [`search`]: query holding and search dispatch
//! - [`navigation`]: intents and the navigator/notifier seams
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod navigation;
pub mod search;
pub mod state;
pub mod store;
