#![deny(missing_debug_implementations)]

//! # rstable-entities
//!
//! Reusable, agnostic domain entities for rstable.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod id;
pub mod restaurant;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
