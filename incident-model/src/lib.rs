//! Browser-independent model of the incident desk UI: wire records,
//! payload decoding, endpoints, and the state behind cards and dialogs.

pub mod card;
pub mod dialog;
pub mod draft;
pub mod dto;
pub mod endpoint;
pub mod error;
pub mod pager;
pub mod payload;

pub use card::{build_cards, CardList, IncidentCard, Page};
pub use dialog::{Dialog, DialogState};
pub use draft::{ResponseDraft, Submission};
pub use dto::{Incident, IncidentId, Response};
pub use endpoint::{ApiConfig, Endpoint};
pub use error::{ApiError, DraftError};
pub use pager::ResponsePager;
