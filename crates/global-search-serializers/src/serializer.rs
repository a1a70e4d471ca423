//! Per-family record serializer.

use global_search_core::RecordFamily;
use serde_json::Value;

use crate::error::SerializeResult;
use crate::format::{FormatSerializer, JsonFormat};
use crate::list::ListSchema;
use crate::schema::{DublinCoreSchema, GlobalSearchSchema};

/// A format emitter, an object schema, and a list schema wired together.
#[derive(Debug)]
pub struct RecordSerializer {
    format: Box<dyn FormatSerializer>,
    object_schema: Box<dyn DublinCoreSchema>,
    list_schema: ListSchema,
}

impl RecordSerializer {
    #[must_use]
    pub fn new(
        format: Box<dyn FormatSerializer>,
        object_schema: Box<dyn DublinCoreSchema>,
        list_schema: ListSchema,
    ) -> Self {
        Self {
            format,
            object_schema,
            list_schema,
        }
    }

    /// The global-search JSON serializer for a record family.
    #[must_use]
    pub fn for_family(family: RecordFamily, format: JsonFormat) -> Self {
        Self::new(
            Box::new(format),
            Box::new(GlobalSearchSchema::for_family(family)),
            ListSchema,
        )
    }

    #[must_use]
    pub fn mimetype(&self) -> &str {
        self.format.mimetype()
    }

    #[must_use]
    pub fn schema_name(&self) -> &str {
        self.object_schema.name()
    }

    /// Dump one record to its Dublin Core JSON value.
    pub fn dump_obj(&self, record: &Value) -> SerializeResult<Value> {
        let dumped = self.object_schema.dump(record)?;
        Ok(dumped.to_json()?)
    }

    /// Dump a page of records, wrapped by the list schema.
    pub fn dump_list(&self, records: &[Value], total: Option<usize>) -> SerializeResult<Value> {
        let hits = records
            .iter()
            .map(|record| self.dump_obj(record))
            .collect::<SerializeResult<Vec<_>>>()?;
        Ok(self.list_schema.dump(hits, total))
    }

    /// Serialize one record to text.
    pub fn serialize_object(&self, record: &Value) -> SerializeResult<String> {
        let value = self.dump_obj(record)?;
        self.format.render(&value)
    }

    /// Serialize a page of records to text.
    pub fn serialize_object_list(
        &self,
        records: &[Value],
        total: Option<usize>,
    ) -> SerializeResult<String> {
        let value = self.dump_list(records, total)?;
        self.format.render(&value)
    }
}
