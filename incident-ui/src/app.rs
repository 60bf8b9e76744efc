use crate::bridge;
use crate::components::{IncidentCards, LogoutButton, RespondDialog, ResponsesDialog};
use incident_model::{ApiConfig, DialogState, Endpoint, Page};
use leptos::*;

#[component]
pub fn App(page: Page) -> impl IntoView {
    let config = ApiConfig::from_env();
    let dialogs = create_rw_signal(DialogState::default());
    let current_user = bridge::current_user_id();

    view! {
      <header class="topbar">
        <h1>{page.heading()}</h1>
        <LogoutButton/>
      </header>

      <section
        id="blurSection"
        class=move || dialogs.with(DialogState::section_class)
      >
        <IncidentCards page=page dialogs=dialogs current_user=current_user/>
      </section>

      <RespondDialog
        dialogs=dialogs
        action=config.url(&Endpoint::SubmitResponse)
        submit_delay=config.submit_delay
      />
      <ResponsesDialog dialogs=dialogs/>
    }
}
