//! Newtype wrappers around [`uuid::Uuid`] for all domain record identifiers.
//!
//! Using distinct types prevents accidentally passing a `NotificationId`
//! where a `JournalId` is expected. Residents, preceptors and every other
//! account share [`UserId`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype ID wrapper around `Uuid`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new time-ordered identifier.
            ///
            /// UUIDv7 keeps identifiers created later sorting after earlier ones.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// First eight hex digits, for compact listings.
            pub fn short(&self) -> String {
                self.0.simple().to_string()[..8].to_string()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user (resident, preceptor, coordinator, secretary).
    UserId
);

define_id!(
    /// Unique identifier for a daily time journal.
    JournalId
);

define_id!(
    /// Unique identifier for a notification.
    NotificationId
);

define_id!(
    /// Unique identifier for a class group.
    ClassGroupId
);
