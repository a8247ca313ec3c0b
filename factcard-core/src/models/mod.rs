//! Domain models for `FactCard`.
//!
//! ## Submodules
//!
//! - [`fact`] - Fact and translation results
//! - [`provider`] - Remote provider specs (endpoint + extraction rule)
//! - [`fallback`] - The embedded local fallback pool
//! - [`policy`] - Display policy: slot order, reveal strategy, timeouts, labels
//! - [`card`] - The rendered card and background state

mod card;
mod fact;
mod fallback;
mod policy;
mod provider;

pub use card::{Background, BackgroundOpacity, CardKind, FactCard};
pub use fact::{FactResult, TranslationResult};
pub use fallback::FallbackPool;
pub use policy::{DisplayLabels, DisplayOrder, DisplayPolicy, RevealStrategy, Timeouts};
pub use provider::{ExtractFn, ProviderSpec};
