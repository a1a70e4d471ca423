//! Object schemas: turn one upstream record into a [`DublinCoreRecord`].
//!
//! The field extraction for each record family belongs to the upstream
//! schema libraries and sits behind [`DublinCoreSchema`]. Global-search only
//! adds post-processing on top, via [`GlobalSearchSchema`].

use std::fmt::Debug;

use global_search_core::{DublinCoreRecord, RecordFamily, RecordPolicy};
use serde_json::Value;

use crate::error::SerializeResult;

/// Extracts the Dublin Core elements of an upstream record.
pub trait DublinCoreSchema: Debug + Send + Sync {
    /// Schema name, for logging.
    fn name(&self) -> &str;

    /// Dump one upstream record.
    fn dump(&self, record: &Value) -> SerializeResult<DublinCoreRecord>;
}

/// Base schema for records that already carry Dublin Core elements, either
/// at the top level or under `"metadata"`.
#[derive(Debug, Clone, Copy)]
pub struct PassthroughSchema {
    family: RecordFamily,
}

impl PassthroughSchema {
    #[must_use]
    pub const fn new(family: RecordFamily) -> Self {
        Self { family }
    }

    #[must_use]
    pub const fn family(&self) -> RecordFamily {
        self.family
    }
}

impl DublinCoreSchema for PassthroughSchema {
    fn name(&self) -> &str {
        match self.family {
            RecordFamily::Lom => "lom-dublin-core",
            RecordFamily::Marc21 => "marc21-dublin-core",
            RecordFamily::Rdm => "rdm-dublin-core",
        }
    }

    fn dump(&self, record: &Value) -> SerializeResult<DublinCoreRecord> {
        Ok(DublinCoreRecord::from_json(record)?)
    }
}

/// A base schema with the global-search field policies applied to its
/// output.
#[derive(Debug, Clone)]
pub struct GlobalSearchSchema<S> {
    base: S,
    policy: RecordPolicy,
}

impl<S: DublinCoreSchema> GlobalSearchSchema<S> {
    #[must_use]
    pub fn new(base: S, policy: RecordPolicy) -> Self {
        Self { base, policy }
    }

    #[must_use]
    pub fn policy(&self) -> &RecordPolicy {
        &self.policy
    }
}

impl GlobalSearchSchema<PassthroughSchema> {
    /// Passthrough base schema with the family's global-search policy.
    #[must_use]
    pub fn for_family(family: RecordFamily) -> Self {
        Self::new(
            PassthroughSchema::new(family),
            RecordPolicy::for_family(family),
        )
    }
}

impl<S: DublinCoreSchema> DublinCoreSchema for GlobalSearchSchema<S> {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn dump(&self, record: &Value) -> SerializeResult<DublinCoreRecord> {
        let dumped = self.base.dump(record)?;
        Ok(self.policy.apply(dumped))
    }
}
