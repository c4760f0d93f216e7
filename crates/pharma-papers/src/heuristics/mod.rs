//! Deterministic affiliation heuristics.
//!
//! Classification is a pure function of a single affiliation string: an
//! ordered rule table evaluated first-match-wins, with academic keywords
//! taking precedence over generic industry keywords. No statistical
//! inference, no cross-author state.

mod classify;
mod email;
mod rules;

pub use classify::{Classification, classify};
pub use email::extract_email;
pub use rules::ClassifierRules;
