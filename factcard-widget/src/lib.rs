// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `FactCard` Widget
//!
//! The "load new fact" operation, decoupled from any concrete UI.
//!
//! [`FactWidget`] composes the quota gate, the fact resolver, the
//! translator and the background image into one invocation and drives a
//! [`Presenter`](factcard_core::Presenter) through it:
//!
//! ```text
//! Idle ──quota denies──▶ Gated
//!   │
//!   └─quota allows──▶ Loading ──text ready──▶ Rendering ──reveal──▶ Revealed
//! ```
//!
//! Nothing inside an invocation fails outward: the worst case is a local
//! fallback fact over a dimmed background.
//!
//! ## Usage
//!
//! ```ignore
//! use factcard_widget::{CardRecorder, FactWidget};
//!
//! let mut widget = FactWidget::from_settings(&settings, quota)?;
//! let mut presenter = CardRecorder::new();
//! let outcome = widget.load_new_fact(&mut presenter).await;
//! println!("{}", outcome.card().primary);
//! ```

pub mod error;
pub mod orchestrator;
pub mod recorder;

pub use error::WidgetError;
pub use orchestrator::{FactWidget, LoadOutcome, WidgetState};
pub use recorder::{CardRecorder, PresenterEvent};
