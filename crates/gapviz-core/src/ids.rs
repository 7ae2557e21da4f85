//! Identifiers shared by every layer

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Calendar year of a measurement
pub type Year = i32;

macro_rules! string_id {
    ($($(#[$meta:meta])* $name:ident),*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(String);

            impl $name {
                pub fn new(value: impl Into<String>) -> Self {
                    Self(value.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl Borrow<str> for $name {
                fn borrow(&self) -> &str {
                    &self.0
                }
            }

            impl AsRef<str> for $name {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }

            impl From<&str> for $name {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }

            impl From<String> for $name {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }

            impl PartialEq<str> for $name {
                fn eq(&self, other: &str) -> bool {
                    self.0 == other
                }
            }

            impl PartialEq<&str> for $name {
                fn eq(&self, other: &&str) -> bool {
                    self.0 == *other
                }
            }
        )*
    }
}

string_id!(
    /// Coarse geographic grouping, e.g. "Sub-Saharan Africa (WB)"
    RegionId,
    /// Education stage, e.g. "primary"
    LevelId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let region = RegionId::new("South Asia (WB)");
        let json = serde_json::to_string(&region).unwrap();
        assert_eq!(json, "\"South Asia (WB)\"");

        let level: LevelId = serde_json::from_str("\"primary\"").unwrap();
        assert_eq!(level, "primary");
    }

    #[test]
    fn test_ids_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(LevelId::from("tertiary"), 3);
        assert_eq!(map.get("tertiary"), Some(&3));
    }
}
