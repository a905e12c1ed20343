//! Shared building blocks: country selection, errors, normalization.
//!
//! The country modules build on these; most callers only need
//! [`CountryCode`] and the `is_valid_*` functions re-exported at the crate root.

mod country;
mod error;
pub mod normalize;
mod person;

pub use country::*;
pub use error::*;
pub use normalize::normalize;
pub use person::Sex;

pub(crate) use person::resolve_birth_date;
