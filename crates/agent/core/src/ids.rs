//! Name-keyed identifiers for world entities.
//!
//! The host identifies everything by its display name. Each kind gets its own
//! newtype so an item can never be passed where a skill is expected. Names
//! known at compile time are borrowed; names read from snapshots are owned.

use std::borrow::{Borrow, Cow};
use std::fmt;

macro_rules! name_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(Cow<'static, str>);

        impl $name {
            /// Identifier for a name known at compile time.
            pub const fn new(name: &'static str) -> Self {
                Self(Cow::Borrowed(name))
            }

            /// Identifier for a name read at runtime.
            pub fn owned(name: impl Into<String>) -> Self {
                Self(Cow::Owned(name.into()))
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

        impl From<&'static str> for $name {
            fn from(value: &'static str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::owned(value)
            }
        }
    };
}

name_id! {
    /// Inventory or equipment item.
    ItemId
}

name_id! {
    /// Castable skill.
    SkillId
}

name_id! {
    /// Companion creature that accompanies the actor.
    CompanionId
}

name_id! {
    /// Timed status effect.
    EffectId
}

name_id! {
    /// Place the actor can spend a turn at.
    LocationId
}

name_id! {
    /// Opponent kind.
    MonsterId
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn borrowed_and_owned_compare_equal() {
        assert_eq!(ItemId::new("June cleaver"), ItemId::owned("June cleaver".to_string()));
    }

    #[test]
    fn maps_can_be_queried_by_str() {
        let mut map = BTreeMap::new();
        map.insert(SkillId::new("Extract"), 1);
        assert_eq!(map.get("Extract"), Some(&1));
    }
}
