use crate::dto::IncidentId;
use std::time::Duration;

/// Where the browser is sent after logging out.
pub const HOME_PATH: &str = "/";

const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Incidents,
    PublicIncidents,
    Responses(IncidentId),
    Logout,
    SubmitResponse,
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Incidents => "/api/incidents".into(),
            Endpoint::PublicIncidents => "/api/publicIncidents".into(),
            Endpoint::Responses(id) => format!("/api/responses/{id}"),
            Endpoint::Logout => "/logout".into(),
            Endpoint::SubmitResponse => "/submit-response".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub submit_delay: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
        }
    }
}

impl ApiConfig {
    /// Reads `INCIDENT_API_BASE` and `INCIDENT_SUBMIT_DELAY_MS` at build
    /// time; the wasm bundle has no process environment to consult later.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "INCIDENT_API_BASE" => option_env!("INCIDENT_API_BASE").map(str::to_string),
            "INCIDENT_SUBMIT_DELAY_MS" => {
                option_env!("INCIDENT_SUBMIT_DELAY_MS").map(str::to_string)
            }
            _ => None,
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: lookup("INCIDENT_API_BASE")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            submit_delay: lookup("INCIDENT_SUBMIT_DELAY_MS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.submit_delay),
        }
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}
