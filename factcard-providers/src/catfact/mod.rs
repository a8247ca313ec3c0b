//! catfact.ninja provider.

mod parser;

pub use parser::parse_fact;

use factcard_core::ProviderSpec;

/// Endpoint returning `{"fact": "...", "length": n}`.
pub const CATFACT_URL: &str = "https://catfact.ninja/fact";

/// Creates the catfact.ninja provider spec.
pub const fn catfact_spec() -> ProviderSpec {
    ProviderSpec::new("catfact", "Cat Facts", CATFACT_URL, parse_fact)
}
