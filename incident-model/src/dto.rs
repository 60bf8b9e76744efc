use serde::{Deserialize, Serialize};
use std::fmt;

const DEFAULT_STATUS: &str = "Reported";

/// Incident identifier as sent by the server.
///
/// The API emits numeric ids, older endpoints emit strings; both are kept
/// as their decimal text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IncidentId(String);

impl IncidentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IncidentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<i64> for IncidentId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(i64),
    Text(String),
}

impl From<WireId> for IncidentId {
    fn from(value: WireId) -> Self {
        match value {
            WireId::Number(n) => n.into(),
            WireId::Text(s) => Self(s),
        }
    }
}

impl<'de> Deserialize<'de> for IncidentId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        WireId::deserialize(deserializer).map(Into::into)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireIncident")]
pub struct Incident {
    pub id: IncidentId,
    pub title: String,
    pub description: String,
    pub status: String,
    pub user_id: Option<i64>,
    pub user_email: Option<String>,
    pub created_at: Option<String>,
}

/// Incident as it appears on the wire: `/api/incidents` keys the record by
/// `id`, `/api/publicIncidents` by `incident_id`.
#[derive(Deserialize)]
struct WireIncident {
    id: Option<IncidentId>,
    incident_id: Option<IncidentId>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    status: Option<String>,
    user_id: Option<i64>,
    user_email: Option<String>,
    created_at: Option<String>,
}

impl TryFrom<WireIncident> for Incident {
    type Error = String;

    fn try_from(wire: WireIncident) -> Result<Self, Self::Error> {
        let id = wire
            .id
            .or(wire.incident_id)
            .ok_or_else(|| "incident is missing both id and incident_id".to_string())?;
        Ok(Self {
            id,
            title: wire.title,
            description: wire.description,
            status: wire.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            user_id: wire.user_id,
            user_email: wire.user_email,
            created_at: wire.created_at,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responder_username: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResponsesEnvelope {
    pub responses: Vec<Response>,
}
