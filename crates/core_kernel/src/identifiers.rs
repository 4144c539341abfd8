//! Strongly-typed identifiers for domain entities
//!
//! Newtype wrappers around UUIDs keep a rental id from being passed where a
//! tenant id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

// Rental domain identifiers
define_id!(PropertyId, "PRP");
define_id!(TenantId, "TNT");
define_id!(RentalId, "RNT");

// Receipt domain identifiers
define_id!(ReceiptId, "RCP");
define_id!(LedgerSessionId, "LDG");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rental_id_display() {
        let id = RentalId::new();
        assert!(id.to_string().starts_with("RNT-"));
    }

    #[test]
    fn test_id_parsing() {
        let original = TenantId::new();
        let parsed: TenantId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }
}
