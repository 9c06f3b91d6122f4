//! URL string analysis.
//!
//! Everything here works on the raw URL text with plain string splitting,
//! not a URL parser: the feature values must match naive splitting exactly,
//! including on malformed input.

mod domain;
mod lexical;

pub use domain::{domain_extension, domain_of, num_sub_domains};
pub use lexical::{
    entropy, has_http, has_https, num_digits, num_fragments, num_parameters, url_length,
};
