// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `FactCard` Core
//!
//! Core types, models, and traits for the `FactCard` widget.
//!
//! This crate provides the foundational abstractions used across all other
//! `FactCard` crates, including:
//!
//! - Domain models (fact results, provider specs, the local fallback pool)
//! - Display policy (slot order, reveal strategy, timeouts, labels)
//! - Error types
//! - The render boundary ([`Presenter`])
//!
//! ## Key Types
//!
//! ### Fact Types
//! - [`FactResult`] - Either a fetched fact or a local fallback, never both
//! - [`TranslationResult`] - Possibly empty translated text
//! - [`ProviderSpec`] - Endpoint plus extraction rule for one remote source
//! - [`FallbackPool`] - Embedded facts used when every provider fails
//!
//! ### Display Types
//! - [`DisplayPolicy`] - Slot order, reveal strategy, timeouts and labels
//! - [`FactCard`] - The finished card handed to a presenter
//! - [`BackgroundOpacity`] - Full or dimmed background

pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Fact types
    FactResult,
    TranslationResult,
    // Provider types
    ExtractFn,
    ProviderSpec,
    // Fallback
    FallbackPool,
    // Policy
    DisplayLabels,
    DisplayOrder,
    DisplayPolicy,
    RevealStrategy,
    Timeouts,
    // Card
    Background,
    BackgroundOpacity,
    CardKind,
    FactCard,
};

// Re-export traits
pub use traits::Presenter;
