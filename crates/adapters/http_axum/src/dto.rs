//! Request bodies and response envelopes for the JSON API.
//!
//! Every response, successful or not, is wrapped in an envelope carrying a
//! `success` flag, an `error` message (empty on success) and the payload.

use serde::{Deserialize, Serialize};

use homebase_domain::home::{Home, NewHome};
use homebase_domain::id::AgentId;

/// Request body for creating or replacing a home.
///
/// Any `id` present in the body is ignored; ids come from the store on
/// create and from the path on update.
#[derive(Debug, Deserialize)]
pub struct HomeRequest {
    pub price: i64,
    pub description: String,
    pub address: String,
    pub agent_id: AgentId,
}

impl From<HomeRequest> for NewHome {
    fn from(req: HomeRequest) -> Self {
        Self {
            price: req.price,
            description: req.description,
            address: req.address,
            agent_id: req.agent_id,
        }
    }
}

/// An envelope that can describe a failed request.
pub trait Envelope: Serialize {
    /// Build the failure form of this envelope.
    fn failure(message: String) -> Self;
}

/// Envelope around a single home (`null` on failure and after delete).
#[derive(Debug, Serialize)]
pub struct HomeEnvelope {
    pub success: bool,
    pub error: String,
    pub home: Option<Home>,
}

impl HomeEnvelope {
    #[must_use]
    pub fn ok(home: Home) -> Self {
        Self {
            success: true,
            error: String::new(),
            home: Some(home),
        }
    }

    /// Successful envelope with no payload, used by delete.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            success: true,
            error: String::new(),
            home: None,
        }
    }
}

impl Envelope for HomeEnvelope {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            error: message,
            home: None,
        }
    }
}

/// Envelope around the full list of homes.
#[derive(Debug, Serialize)]
pub struct HomesEnvelope {
    pub success: bool,
    pub error: String,
    pub homes: Vec<Home>,
}

impl HomesEnvelope {
    #[must_use]
    pub fn ok(homes: Vec<Home>) -> Self {
        Self {
            success: true,
            error: String::new(),
            homes,
        }
    }
}

impl Envelope for HomesEnvelope {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            error: message,
            homes: Vec::new(),
        }
    }
}
