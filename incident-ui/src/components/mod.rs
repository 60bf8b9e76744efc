pub mod incident_cards;
pub mod logout_button;
pub mod respond_dialog;
pub mod responses_dialog;

pub use incident_cards::IncidentCards;
pub use logout_button::LogoutButton;
pub use respond_dialog::RespondDialog;
pub use responses_dialog::ResponsesDialog;
