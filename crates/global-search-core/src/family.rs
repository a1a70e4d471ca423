use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// An upstream record schema family that can be reduced to Dublin Core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFamily {
    /// Learning Object Metadata records.
    Lom,
    /// MARC21 bibliographic records.
    Marc21,
    /// Research data management records.
    Rdm,
}

/// Names accepted when parsing a [`RecordFamily`].
const FAMILY_NAMES: &[(RecordFamily, &str)] = &[
    (RecordFamily::Lom, "lom"),
    (RecordFamily::Marc21, "marc21"),
    (RecordFamily::Rdm, "rdm"),
];

impl RecordFamily {
    pub const ALL: [Self; 3] = [Self::Lom, Self::Marc21, Self::Rdm];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lom => "lom",
            Self::Marc21 => "marc21",
            Self::Rdm => "rdm",
        }
    }
}

impl fmt::Display for RecordFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RecordFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        FAMILY_NAMES
            .iter()
            .find(|(_, canonical)| canonical.eq_ignore_ascii_case(name))
            .map(|&(family, _)| family)
            .ok_or_else(|| Error::UnknownFamily(s.to_string()))
    }
}
