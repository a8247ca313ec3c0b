// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `FactCard` Providers
//!
//! The remote fact providers and the local fallback facts.
//!
//! Each provider module contributes a [`ProviderSpec`]: an endpoint and a
//! parser that extracts the fact text from the JSON body.
//!
//! ## Supported Providers
//!
//! | Priority | Id | Endpoint | Field |
//! |----------|----|----------|-------|
//! | 1 | `catfact` | catfact.ninja | `fact` |
//! | 2 | `meowfacts` | meowfacts.herokuapp.com | `data[0]` |
//! | 3 | `uselessfacts` | uselessfacts.jsph.pl | `text` |
//!
//! ## Usage
//!
//! ```ignore
//! use factcard_providers::SourceRegistry;
//! use factcard_fetch::FetchContext;
//!
//! let resolver = SourceRegistry::build_resolver(&[])?;
//! let outcome = resolver.resolve(&FetchContext::new()).await;
//! ```
//!
//! [`ProviderSpec`]: factcard_core::ProviderSpec

pub mod local;
pub mod registry;

// Provider modules (priority order)
pub mod catfact;
pub mod meowfacts;
pub mod uselessfacts;

pub use local::{LOCAL_FACTS, local_fallback_pool};
pub use registry::SourceRegistry;

pub use catfact::catfact_spec;
pub use meowfacts::meowfacts_spec;
pub use uselessfacts::uselessfacts_spec;
