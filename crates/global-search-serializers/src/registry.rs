//! Capability registry for record-family serializers.
//!
//! Which upstream schema families are installed is decided once, when the
//! registry is probed, and never changes afterwards. Families that are not
//! installed still get an [`Adapter`], in the `Unsupported` state, so callers
//! can look up any family unconditionally.

use std::sync::OnceLock;

use global_search_core::RecordFamily;
use serde_json::Value;

use crate::error::{SerializeError, SerializeResult};
use crate::format::JsonFormat;
use crate::serializer::RecordSerializer;

static GLOBAL: OnceLock<SerializerRegistry> = OnceLock::new();

/// The serializer slot for one record family.
#[derive(Debug)]
pub enum Adapter {
    /// The upstream schema family is installed.
    Available(RecordSerializer),
    /// The upstream schema family is missing; serializing is refused.
    Unsupported(RecordFamily),
}

impl Adapter {
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// The wrapped serializer.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::Unsupported`] for an unavailable adapter.
    pub fn serializer(&self) -> SerializeResult<&RecordSerializer> {
        match self {
            Self::Available(serializer) => Ok(serializer),
            Self::Unsupported(family) => {
                log::warn!("Serializer requested for unsupported family {}", family);
                Err(SerializeError::Unsupported { family: *family })
            }
        }
    }

    pub fn serialize_object(&self, record: &Value) -> SerializeResult<String> {
        self.serializer()?.serialize_object(record)
    }

    pub fn serialize_object_list(
        &self,
        records: &[Value],
        total: Option<usize>,
    ) -> SerializeResult<String> {
        self.serializer()?.serialize_object_list(records, total)
    }
}

/// One [`Adapter`] per [`RecordFamily`].
#[derive(Debug)]
pub struct SerializerRegistry {
    lom: Adapter,
    marc21: Adapter,
    rdm: Adapter,
}

impl SerializerRegistry {
    /// Build the registry, marking each family available if it appears in
    /// `installed`.
    #[must_use]
    pub fn probe(installed: &[RecordFamily], format: JsonFormat) -> Self {
        let adapter = |family: RecordFamily| {
            if installed.contains(&family) {
                log::info!("Dublin Core serializer for {} records: available", family);
                Adapter::Available(RecordSerializer::for_family(family, format))
            } else {
                log::info!("Dublin Core serializer for {} records: unsupported", family);
                Adapter::Unsupported(family)
            }
        };

        Self {
            lom: adapter(RecordFamily::Lom),
            marc21: adapter(RecordFamily::Marc21),
            rdm: adapter(RecordFamily::Rdm),
        }
    }

    #[must_use]
    pub const fn get(&self, family: RecordFamily) -> &Adapter {
        match family {
            RecordFamily::Lom => &self.lom,
            RecordFamily::Marc21 => &self.marc21,
            RecordFamily::Rdm => &self.rdm,
        }
    }

    /// Families whose adapters are available, in canonical order.
    pub fn available(&self) -> impl Iterator<Item = RecordFamily> + '_ {
        RecordFamily::ALL
            .into_iter()
            .filter(|family| self.get(*family).is_available())
    }

    /// Install `registry` as the process-wide instance.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::RegistryAlreadyInstalled`] if called twice.
    pub fn install(registry: Self) -> SerializeResult<&'static Self> {
        GLOBAL
            .set(registry)
            .map_err(|_| SerializeError::RegistryAlreadyInstalled)?;
        GLOBAL.get().ok_or(SerializeError::RegistryAlreadyInstalled)
    }

    /// The process-wide instance, if one was installed.
    pub fn global() -> Option<&'static Self> {
        GLOBAL.get()
    }
}
