//! # TUI Components
//!
//! UI components for the terminal home screen.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top status line with loading spinner
//! - `RecipeRow`: one horizontal strip of recipe cards
//! - `Notice`: modal alert overlay
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBar`: single-line query input, emits `SearchEvent`
//!
//! Components receive external data as props, never by reaching into `App`.

mod notice;
mod recipe_row;
pub mod search_bar;
mod title_bar;

pub use notice::Notice;
pub use recipe_row::RecipeRow;
pub use search_bar::{SearchBar, SearchEvent};
pub use title_bar::TitleBar;
