//! Selection resolution: turn selected arithmetic text into its answer.
//!
//! A [`Resolver`] owns the "previous result" state for one batch of
//! selections. Each call substitutes placeholders ([`tokens`]), checks the
//! character class ([`validate`]), evaluates through a pluggable
//! [`calc_engine::Evaluator`] and formats the answer. Declined inputs come
//! back unchanged; nothing here panics on user text.

pub mod batch;
pub mod options;
pub mod resolver;
pub mod tokens;
pub mod validate;

pub use batch::{is_actionable, Batch};
pub use options::{PlaceholderError, Placeholders, ResolverOptions};
pub use resolver::{Resolution, Resolver, INITIAL_RESULT};
pub use validate::{RejectReason, Shape};
