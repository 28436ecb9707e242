//! Typed identifier newtypes backed by store-assigned integers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident, $kind:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw integer identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Access the inner integer.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }

            /// Parse an identifier coming from user input (e.g. a path segment).
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::InvalidId`] when `value` is not an integer
            /// (surrounding whitespace included), and
            /// [`ValidationError::NonCanonicalId`] when it carries a `+` sign.
            pub fn parse(value: &str) -> Result<Self, ValidationError> {
                if value.starts_with('+') {
                    return Err(ValidationError::NonCanonicalId {
                        kind: $kind,
                        value: value.to_string(),
                    });
                }
                value
                    .parse()
                    .map_err(|source| ValidationError::InvalidId {
                        kind: $kind,
                        value: value.to_string(),
                        source,
                    })
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Home`](crate::home::Home), assigned by the store.
    HomeId,
    "home"
);

define_id!(
    /// Reference to the agent responsible for a listing.
    AgentId,
    "agent"
);
