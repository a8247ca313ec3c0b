//! meowfacts provider.

mod parser;

pub use parser::parse_fact;

use factcard_core::ProviderSpec;

/// Endpoint returning `{"data": ["..."]}`.
pub const MEOWFACTS_URL: &str = "https://meowfacts.herokuapp.com/";

/// Creates the meowfacts provider spec.
pub const fn meowfacts_spec() -> ProviderSpec {
    ProviderSpec::new("meowfacts", "Meow Facts", MEOWFACTS_URL, parse_fact)
}
