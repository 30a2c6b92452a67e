// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

// Identifiers are the server's `_id` strings, carried verbatim. The client
// never inspects or re-encodes them.
macro_rules! entity_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

entity_id!(InvoiceId);
entity_id!(ProjectId);
entity_id!(ClientId);
entity_id!(PersonId);

#[cfg(test)]
mod tests {
    use super::{InvoiceId, ProjectId};

    #[test]
    fn id_round_trips_raw_server_string() {
        let id = InvoiceId::new("65f2a41cf1e6a93dbd5e4a01");
        assert_eq!(id.as_str(), "65f2a41cf1e6a93dbd5e4a01");
        assert_eq!(id.to_string(), "65f2a41cf1e6a93dbd5e4a01");
    }

    #[test]
    fn blank_detection_ignores_whitespace() {
        assert!(ProjectId::new("").is_blank());
        assert!(ProjectId::new("   ").is_blank());
        assert!(!ProjectId::new("p-1").is_blank());
    }
}
