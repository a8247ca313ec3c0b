//! Source registry.
//!
//! The ordered list of remote providers. Order is priority: the resolver
//! tries entries front to back and stops at the first success.

use std::sync::OnceLock;

use factcard_core::{CoreError, ProviderSpec};
use factcard_fetch::host::http::host_of;
use factcard_fetch::image::IMAGE_BASE_URL;
use factcard_fetch::translate::GOOGLE_TRANSLATE_URL;
use factcard_fetch::{FactResolver, FactSource, HttpFactSource};
use tracing::debug;

use crate::catfact::catfact_spec;
use crate::local::local_fallback_pool;
use crate::meowfacts::meowfacts_spec;
use crate::uselessfacts::uselessfacts_spec;

// ============================================================================
// Static Registry
// ============================================================================

static SPECS: OnceLock<Vec<ProviderSpec>> = OnceLock::new();

fn init_specs() -> Vec<ProviderSpec> {
    vec![catfact_spec(), meowfacts_spec(), uselessfacts_spec()]
}

// ============================================================================
// Source Registry
// ============================================================================

/// Global registry of fact providers.
pub struct SourceRegistry;

impl SourceRegistry {
    /// Returns every provider in priority order.
    pub fn all() -> &'static [ProviderSpec] {
        SPECS.get_or_init(init_specs)
    }

    /// Looks up a provider by id.
    pub fn get(id: &str) -> Option<&'static ProviderSpec> {
        Self::all().iter().find(|spec| spec.id == id)
    }

    /// Returns the number of registered providers.
    pub fn count() -> usize {
        Self::all().len()
    }

    /// Returns all provider ids in priority order.
    pub fn ids() -> Vec<&'static str> {
        Self::all().iter().map(|spec| spec.id).collect()
    }

    /// Returns providers not named in `disabled`, in priority order.
    pub fn enabled<S: AsRef<str>>(disabled: &[S]) -> Vec<&'static ProviderSpec> {
        Self::all()
            .iter()
            .filter(|spec| !disabled.iter().any(|id| id.as_ref() == spec.id))
            .collect()
    }

    /// Builds HTTP sources for the enabled providers.
    pub fn sources<S: AsRef<str>>(disabled: &[S]) -> Vec<Box<dyn FactSource>> {
        Self::enabled(disabled)
            .into_iter()
            .map(|spec| Box::new(HttpFactSource::new(*spec)) as Box<dyn FactSource>)
            .collect()
    }

    /// Builds a resolver over the enabled providers and the local pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the local fallback pool cannot be built.
    pub fn build_resolver<S: AsRef<str>>(disabled: &[S]) -> Result<FactResolver, CoreError> {
        let sources = Self::sources(disabled);
        debug!(count = sources.len(), "Building fact resolver");
        Ok(FactResolver::with_sources(sources, local_fallback_pool()?))
    }

    /// Hosts the widget needs to reach: providers, translator, image service.
    pub fn allowed_domains() -> Vec<String> {
        let mut domains: Vec<String> = Self::all()
            .iter()
            .map(|spec| spec.endpoint)
            .chain([GOOGLE_TRANSLATE_URL, IMAGE_BASE_URL])
            .filter_map(host_of)
            .collect();
        domains.dedup();
        domains
    }
}

// ============================================================================
// Tests
// ============================================================================
