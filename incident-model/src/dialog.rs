use crate::dto::IncidentId;

/// Class put on the page section behind an open dialog.
pub const BLUR_CLASS: &str = "blurWindow";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialog {
    /// Form for submitting a response to one incident.
    Respond,
    /// Read-only list of the responses attached to one incident.
    Responses,
}

/// Which dialogs are open, and for which incident.
///
/// Every operation is idempotent: opening an open dialog only retargets
/// it, closing a closed one changes nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogState {
    respond: Option<IncidentId>,
    responses: Option<IncidentId>,
}

impl DialogState {
    pub fn open_respond(&mut self, id: IncidentId) {
        self.respond = Some(id);
    }

    pub fn open_responses(&mut self, id: IncidentId) {
        self.responses = Some(id);
    }

    pub fn close_respond(&mut self) {
        self.respond = None;
    }

    pub fn close_responses(&mut self) {
        self.responses = None;
    }

    pub fn close(&mut self, dialog: Dialog) {
        match dialog {
            Dialog::Respond => self.close_respond(),
            Dialog::Responses => self.close_responses(),
        }
    }

    pub fn close_all(&mut self) {
        self.respond = None;
        self.responses = None;
    }

    pub fn is_open(&self, dialog: Dialog) -> bool {
        self.target(dialog).is_some()
    }

    pub fn target(&self, dialog: Dialog) -> Option<&IncidentId> {
        match dialog {
            Dialog::Respond => self.respond.as_ref(),
            Dialog::Responses => self.responses.as_ref(),
        }
    }

    pub fn is_blurred(&self) -> bool {
        self.respond.is_some() || self.responses.is_some()
    }

    /// Class list for the page section behind the dialogs.
    pub fn section_class(&self) -> &'static str {
        if self.is_blurred() {
            BLUR_CLASS
        } else {
            ""
        }
    }

    /// Whether responses fetched for `requested` may still be shown: the
    /// responses dialog must be open on that same incident.
    pub fn accepts_responses_for(&self, requested: &IncidentId) -> bool {
        self.responses.as_ref() == Some(requested)
    }
}

/// CSS `display` value for a dialog element.
pub fn display(open: bool) -> &'static str {
    if open {
        "block"
    } else {
        "none"
    }
}
