//! Presence-aware field values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A record field that is either present (possibly empty) or was never
/// populated by the upstream schema.
///
/// `Absent` is distinct from `Present(vec![])`: the first is dropped from the
/// JSON output entirely, the second is emitted as `[]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field<T> {
    Present(T),
    Absent,
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Field<T> {
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Transform the present value, leaving `Absent` untouched.
    pub fn map<U, F>(self, f: F) -> Field<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Field::Present(f(value)),
            Self::Absent => Field::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => value.serialize(serializer),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_absent() {
        let field: Field<Vec<String>> = Field::default();
        assert!(field.is_absent());
        assert!(!field.is_present());
    }

    #[test]
    fn test_map_skips_absent() {
        let absent: Field<u32> = Field::Absent;
        assert_eq!(absent.map(|v| v + 1), Field::Absent);
        assert_eq!(Field::Present(1).map(|v| v + 1), Field::Present(2));
    }

    #[test]
    fn test_empty_is_not_absent() {
        let empty: Field<Vec<String>> = Field::Present(Vec::new());
        assert!(empty.is_present());
        assert_eq!(serde_json::to_value(&empty).unwrap(), json!([]));
    }

    #[test]
    fn test_null_deserializes_to_absent() {
        let field: Field<Vec<String>> = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(field, Field::Absent);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Field::from(Some(3)), Field::Present(3));
        assert_eq!(Field::<u8>::from(None), Field::Absent);
        assert_eq!(Field::Present(3).into_option(), Some(3));
    }
}
