//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the catalog,
//! navigation and pagination layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └─────── Catalog Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Route, input mode and fetch status types
//! - [`state`]: Central application state container
//! - [`view`]: View model computation
//!
//! # Example
//!
//! ```rust
//! use bookworld::app::{handle_event, AppState, Event};
//! use bookworld::Config;
//!
//! let mut state = AppState::new(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert!(actions.is_empty());
//! # Ok::<(), bookworld::BookworldError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;
pub mod view;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{DetailsStatus, InputMode, ResultsStatus, Route};
pub use state::AppState;
