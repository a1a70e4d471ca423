//! Dublin Core JSON serializers for global-search.
//!
//! Wires a format emitter, an object schema, and a list schema into one
//! [`RecordSerializer`] per record family, and keeps them in a
//! [`SerializerRegistry`] that records which families this deployment can
//! serve.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod format;
pub mod list;
pub mod registry;
pub mod schema;
pub mod serializer;

pub use config::Config;
pub use error::{SerializeError, SerializeResult};
pub use format::{FormatSerializer, JsonFormat};
pub use list::ListSchema;
pub use registry::{Adapter, SerializerRegistry};
pub use schema::{DublinCoreSchema, GlobalSearchSchema, PassthroughSchema};
pub use serializer::RecordSerializer;
