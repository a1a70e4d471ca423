//! Field-level post-processing policies for Dublin Core output.
//!
//! Upstream schemas already extract `rights` and `types`, but in a form
//! meant for a record landing page: rights come as both a title and a link,
//! and types come as vocabulary paths. In the global-search context only
//! readable labels are wanted. The policies here rewrite those two fields
//! and leave every other field alone.
//!
//! # Example
//!
//! ```
//! use global_search_core::{filter_rights, Field};
//!
//! let rights = Field::Present(vec![
//!     "CC-BY".to_string(),
//!     "https://creativecommons.org/licenses/by".to_string(),
//!     "info:eu-repo/semantics/OpenAccess".to_string(),
//! ]);
//! assert_eq!(
//!     filter_rights(rights),
//!     Field::Present(vec!["CC-BY".to_string(), "Open Access".to_string()])
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::dublin_core::DublinCoreRecord;
use crate::family::RecordFamily;
use crate::field::Field;
use crate::label::derive_label;

/// Link-form entries are recognised by this substring.
const LINK_MARKER: &str = "http";

/// Lowercased entries containing this are treated as access-right paths.
const ACCESS_MARKER: &str = "access";

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// Drop link-form rights and relabel access-right paths.
///
/// For each entry, in order:
/// - anything containing `"http"` is dropped, since upstream always emits the
///   rights title next to its link;
/// - anything whose lowercase form contains `"access"` goes through
///   [`derive_label`], so `.../OpenAccess` becomes `Open Access`;
/// - everything else is kept verbatim.
///
/// The access check is a plain substring test. Free text such as
/// `"Access granted upon request"` is relabelled too.
pub fn filter_rights(rights: Field<Vec<String>>) -> Field<Vec<String>> {
    rights.map(|entries| {
        entries
            .into_iter()
            .filter(|right| !right.contains(LINK_MARKER))
            .map(|right| {
                if right.to_lowercase().contains(ACCESS_MARKER) {
                    derive_label(&right)
                } else {
                    right
                }
            })
            .collect()
    })
}

/// Relabel every resource type. Nothing is dropped.
pub fn map_types(types: Field<Vec<String>>) -> Field<Vec<String>> {
    types.map(|entries| entries.iter().map(|t| derive_label(t)).collect())
}

/// How the `rights` field of a record is post-processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RightsPolicy {
    /// Pass through unchanged.
    #[default]
    Keep,
    /// Drop link-form entries and relabel access-right paths.
    GlobalSearch,
}

impl RightsPolicy {
    pub fn apply(self, rights: Field<Vec<String>>) -> Field<Vec<String>> {
        match self {
            Self::Keep => rights,
            Self::GlobalSearch => filter_rights(rights),
        }
    }
}

/// How the `types` field of a record is post-processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypesPolicy {
    /// Pass through unchanged.
    #[default]
    Keep,
    /// Relabel every entry.
    Labels,
}

impl TypesPolicy {
    pub fn apply(self, types: Field<Vec<String>>) -> Field<Vec<String>> {
        match self {
            Self::Keep => types,
            Self::Labels => map_types(types),
        }
    }
}

/// The pair of field policies applied on top of a base schema's output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPolicy {
    #[serde(default)]
    pub rights: RightsPolicy,
    #[serde(default)]
    pub types: TypesPolicy,
}

impl RecordPolicy {
    /// The global-search policy for a record family.
    ///
    /// | family | rights | types |
    /// |---|---|---|
    /// | RDM | `GlobalSearch` | `Labels` |
    /// | LOM | `Keep` | `Keep` |
    /// | MARC21 | `Keep` | `Keep` |
    #[must_use]
    pub const fn for_family(family: RecordFamily) -> Self {
        match family {
            RecordFamily::Rdm => Self {
                rights: RightsPolicy::GlobalSearch,
                types: TypesPolicy::Labels,
            },
            RecordFamily::Lom | RecordFamily::Marc21 => Self {
                rights: RightsPolicy::Keep,
                types: TypesPolicy::Keep,
            },
        }
    }

    /// Returns `true` when applying this policy never changes a record.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.rights == RightsPolicy::Keep && self.types == TypesPolicy::Keep
    }

    /// Rewrite the `rights` and `types` fields of `record`.
    #[must_use]
    pub fn apply(&self, mut record: DublinCoreRecord) -> DublinCoreRecord {
        if self.is_identity() {
            return record;
        }

        log::debug!(
            "Applying rights policy {:?} and types policy {:?}",
            self.rights,
            self.types
        );

        record.rights = self.rights.apply(std::mem::take(&mut record.rights));
        record.types = self.types.apply(std::mem::take(&mut record.types));
        record
    }
}
