#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # tagmix-entities
//!
//! Reusable, agnostic domain entities for tagmix.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod id;
pub mod playlist;
pub mod tag;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
