//! Core model for global-search.
//!
//! This crate defines the label normalizer that turns path-like vocabulary
//! identifiers into display labels, the presence-aware [`Field`] type, the
//! `rights`/`types` post-processing policies, and the Dublin Core record
//! shape that every record family is reduced to.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod dublin_core;
pub mod error;
pub mod family;
pub mod field;
pub mod label;
pub mod policy;

pub use dublin_core::DublinCoreRecord;
pub use error::{Error, Result};
pub use family::RecordFamily;
pub use field::Field;
pub use label::{derive_label, last_segment, split_words};
pub use policy::{filter_rights, map_types, RecordPolicy, RightsPolicy, TypesPolicy};
