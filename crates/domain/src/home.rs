//! Home — a property listing, the sole entity of the service.

use serde::{Deserialize, Serialize};

use crate::id::{AgentId, HomeId};

/// A persisted property listing.
///
/// `id` is assigned by the store when the listing is first saved and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Home {
    pub id: HomeId,
    pub price: i64,
    pub description: String,
    pub address: String,
    pub agent_id: AgentId,
}

/// A listing that has not been saved yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHome {
    pub price: i64,
    pub description: String,
    pub address: String,
    pub agent_id: AgentId,
}

impl NewHome {
    /// Attach a store-assigned id, producing a persisted [`Home`].
    #[must_use]
    pub fn with_id(self, id: HomeId) -> Home {
        Home {
            id,
            price: self.price,
            description: self.description,
            address: self.address,
            agent_id: self.agent_id,
        }
    }
}

impl Home {
    /// Drop the id, keeping every mutable field.
    #[must_use]
    pub fn into_new(self) -> NewHome {
        NewHome {
            price: self.price,
            description: self.description,
            address: self.address,
            agent_id: self.agent_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lakehouse() -> NewHome {
        NewHome {
            price: 500_000,
            description: "Lakehouse".to_string(),
            address: "1 Lake Rd".to_string(),
            agent_id: AgentId::new(7),
        }
    }

    #[test]
    fn should_keep_fields_when_attaching_id() {
        let home = lakehouse().with_id(HomeId::new(1));
        assert_eq!(home.id, HomeId::new(1));
        assert_eq!(home.price, 500_000);
        assert_eq!(home.description, "Lakehouse");
        assert_eq!(home.address, "1 Lake Rd");
        assert_eq!(home.agent_id, AgentId::new(7));
        assert_eq!(home.into_new(), lakehouse());
    }

    #[test]
    fn should_serialize_with_flat_integer_ids() {
        let home = lakehouse().with_id(HomeId::new(1));
        let json = serde_json::to_value(&home).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "price": 500_000,
                "description": "Lakehouse",
                "address": "1 Lake Rd",
                "agent_id": 7,
            })
        );
    }

    #[test]
    fn should_ignore_client_supplied_id_when_decoding_new_home() {
        let new: NewHome = serde_json::from_str(
            r#"{"id":99,"price":1,"description":"d","address":"a","agent_id":2}"#,
        )
        .unwrap();
        assert_eq!(new.with_id(HomeId::new(3)).id, HomeId::new(3));
    }
}
