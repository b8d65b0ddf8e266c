//! User interface layer.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → layout → Frame → Zellij print_* calls
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`frame`]: Positioned widgets handed to the plugin shim
//! - [`helpers`]: Shared formatting utilities
//!
//! # Example
//!
//! ```rust
//! use bookworld::app::AppState;
//! use bookworld::ui::render;
//! use bookworld::Config;
//!
//! let state = AppState::new(&Config::default());
//! let frame = render(&state, 24, 80);
//! assert!(!frame.widgets().is_empty());
//! ```

pub mod components;
pub mod frame;
pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use frame::{Frame, Highlight, TableRow, Widget};
pub use renderer::render;
pub use viewmodel::{
    DetailInfo, DetailPanel, DisplayItem, EmptyState, FooterInfo, HeaderInfo, PageButton,
    PaginationInfo, SearchBarInfo, UIViewModel,
};
