//! Accessory identity type

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Namespace for identifiers derived from non-UUID device identifiers
const DERIVED_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a4e_9b3d_5e07_a8c1_4d2f_0e6b_7a93);

/// Length of the hyphenated UUID form, the only form hosts accept as-is
const HYPHENATED_LEN: usize = 36;

/// Stable identifier of the accessory projected for a device
///
/// Devices advertise a UDN such as `uuid:5f9ec1b3-ed59-49d8-a3d5-b2a3f3e1c7a0`.
/// Many renderers put something that is not a UUID after the prefix (e.g.
/// `uuid:RINCON_000E58A0123456`); those get a name-based UUID derived from the
/// raw string so the same device always maps to the same accessory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessoryId(Uuid);

impl AccessoryId {
    /// Derive the accessory id for a device identifier
    pub fn from_udn(udn: &str) -> Self {
        let raw = udn.strip_prefix("uuid:").unwrap_or(udn);

        match Uuid::parse_str(raw) {
            Ok(uuid) if raw.len() == HYPHENATED_LEN => Self(uuid),
            _ => Self(Uuid::new_v5(&DERIVED_ID_NAMESPACE, raw.as_bytes())),
        }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AccessoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for AccessoryId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_uuid_is_kept() {
        let id = AccessoryId::from_udn("uuid:5f9ec1b3-ed59-49d8-a3d5-b2a3f3e1c7a0");
        assert_eq!(id.to_string(), "5f9ec1b3-ed59-49d8-a3d5-b2a3f3e1c7a0");
    }

    #[test]
    fn test_prefix_is_optional() {
        assert_eq!(
            AccessoryId::from_udn("uuid:5f9ec1b3-ed59-49d8-a3d5-b2a3f3e1c7a0"),
            AccessoryId::from_udn("5f9ec1b3-ed59-49d8-a3d5-b2a3f3e1c7a0"),
        );
    }

    #[test]
    fn test_uppercase_uuid_is_normalized() {
        let id = AccessoryId::from_udn("uuid:5F9EC1B3-ED59-49D8-A3D5-B2A3F3E1C7A0");
        assert_eq!(id.to_string(), "5f9ec1b3-ed59-49d8-a3d5-b2a3f3e1c7a0");
    }

    #[test]
    fn test_non_uuid_is_derived() {
        let id = AccessoryId::from_udn("uuid:RINCON_000E58A0123456");
        assert_eq!(id.as_uuid().get_version_num(), 5);
        assert_eq!(id, AccessoryId::from_udn("uuid:RINCON_000E58A0123456"));
    }

    #[test]
    fn test_simple_form_is_derived() {
        // Hosts only accept the hyphenated form, so compact UUIDs are re-derived
        let id = AccessoryId::from_udn("uuid:5f9ec1b3ed5949d8a3d5b2a3f3e1c7a0");
        assert_eq!(id.as_uuid().get_version_num(), 5);
    }

    proptest! {
        #[test]
        fn prop_derivation_is_deterministic(raw in "[A-Za-z0-9_:-]{1,48}") {
            prop_assert_eq!(AccessoryId::from_udn(&raw), AccessoryId::from_udn(&raw));
        }

        #[test]
        fn prop_distinct_identifiers_do_not_collide(
            a in "RINCON_[0-9A-F]{12}",
            b in "RINCON_[0-9A-F]{12}",
        ) {
            prop_assume!(a != b);
            prop_assert_ne!(AccessoryId::from_udn(&a), AccessoryId::from_udn(&b));
        }
    }
}
