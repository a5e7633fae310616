//! Application layer: the state controller.
//!
//! This module owns every piece of mutable application state and the
//! operations that change it. It sits between the front end (`main.rs`) and
//! the runtime that performs network, storage and share side effects.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Task Completions ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Active query and view mode types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use lumina::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new(Default::default());
//! let (_, actions) = handle_event(&mut state, Event::Init)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{ActiveQuery, ViewMode};
pub use state::AppState;
