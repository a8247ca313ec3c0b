// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # FactCard Fetch
//!
//! The unreliable half of the widget: every network call and every deadline.
//!
//! ## Host APIs
//!
//! - [`host::http`] - HTTP client with tracing and domain allowlist
//!
//! ## Fact Pipeline
//!
//! - [`timeout::with_timeout`] - Races any fallible future against a deadline
//! - [`source::FactSource`] - One remote provider (HTTP or mock)
//! - [`resolver::FactResolver`] - Tries sources in order, falls back locally
//! - [`translate::TranslateApi`] - Best-effort translation, empty on failure
//! - [`image::ImageHandle`] - Background image load running on its own task
//! - [`context::FetchContext`] - Shared HTTP client and settings
//!
//! ## Example
//!
//! ```ignore
//! use factcard_fetch::{FactResolver, FetchContext, HttpFactSource};
//!
//! let ctx = FetchContext::new();
//! let resolver = FactResolver::with_sources(
//!     vec![Box::new(HttpFactSource::new(spec))],
//!     pool,
//! );
//!
//! // Never fails: total provider failure yields a local fallback fact.
//! let outcome = resolver.resolve(&ctx).await;
//! println!("{}", outcome.result.text());
//! ```

// Core modules
pub mod context;
pub mod error;
pub mod host;
pub mod image;
pub mod resolver;
pub mod source;
pub mod timeout;
pub mod translate;

// Re-export key types at crate root

// Errors
pub use error::{FetchError, HttpError};

// Host APIs
pub use host::http::HttpClient;

// Pipeline
pub use context::{FetchContext, FetchContextBuilder, FetchSettings};
pub use image::{HttpImageLoader, ImageApi, ImageHandle, ImageSpec, LoadedImage};
pub use resolver::{FactAttempt, FactOutcome, FactResolver};
pub use source::{FactSource, HttpFactSource};
pub use timeout::with_timeout;
pub use translate::{GoogleTranslator, TranslateApi, join_segments, parse_translation};
