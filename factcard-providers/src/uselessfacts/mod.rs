//! uselessfacts.jsph.pl provider.

mod parser;

pub use parser::parse_fact;

use factcard_core::ProviderSpec;

/// Random English fact endpoint returning `{"id": ..., "text": "..."}`.
pub const USELESSFACTS_URL: &str = "https://uselessfacts.jsph.pl/api/v2/facts/random?language=en";

/// Creates the uselessfacts provider spec.
pub const fn uselessfacts_spec() -> ProviderSpec {
    ProviderSpec::new("uselessfacts", "Useless Facts", USELESSFACTS_URL, parse_fact)
}
