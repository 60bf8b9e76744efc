use crate::dto::IncidentId;
use crate::error::DraftError;

/// Fields of the response form, named as the form posts them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseDraft {
    pub incident_id: String,
    pub response: String,
}

impl ResponseDraft {
    pub fn new(incident_id: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            incident_id: incident_id.into(),
            response: response.into(),
        }
    }

    /// Returns the trimmed draft, or the first missing field.
    pub fn validate(&self) -> Result<ResponseDraft, DraftError> {
        let incident_id = self.incident_id.trim();
        if incident_id.is_empty() {
            return Err(DraftError::MissingIncident);
        }
        let response = self.response.trim();
        if response.is_empty() {
            return Err(DraftError::EmptyResponse);
        }
        Ok(ResponseDraft::new(incident_id, response))
    }
}

/// A response accepted for posting whose native submit has not fired yet.
///
/// While pending, the form fields are pinned to the validated draft, so
/// closing or retargeting the dialog cannot change what gets posted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    pending: Option<ResponseDraft>,
}

impl Submission {
    /// Validates `draft` and holds it until the submit fires or fails.
    pub fn begin(&mut self, draft: ResponseDraft) -> Result<ResponseDraft, DraftError> {
        if self.pending.is_some() {
            return Err(DraftError::AlreadyPending);
        }
        let draft = draft.validate()?;
        self.pending = Some(draft.clone());
        Ok(draft)
    }

    /// Drops the held draft after a failed submit so the form is live again.
    pub fn abandon(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Values the form should carry: the held draft while pending,
    /// otherwise the dialog target and the text typed so far.
    pub fn form_fields(&self, target: Option<&IncidentId>, typed: &str) -> ResponseDraft {
        match &self.pending {
            Some(draft) => draft.clone(),
            None => {
                let incident_id = target.map(ToString::to_string).unwrap_or_default();
                ResponseDraft::new(incident_id, typed)
            }
        }
    }
}
