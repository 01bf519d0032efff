//! Combinators composing [`Validate`](crate::foundation::Validate) checks.

pub mod and;
pub mod when;

pub use and::And;
pub use when::When;
