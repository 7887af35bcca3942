//! Certificate construction, self-signing, and inspection.

pub mod builder;
pub mod inspect;
pub mod selfsign;
