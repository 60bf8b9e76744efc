use crate::bridge;
use incident_model::dialog::display;
use incident_model::{Dialog, DialogState, Submission};
use leptos::logging::{error, log, warn};
use leptos::*;
use std::time::Duration;

/// Form that posts a response for the targeted incident.
///
/// Submission is native: after logging the text the form is submitted
/// programmatically once `submit_delay` has elapsed, and the server answers
/// with a redirect. Until then the fields hold the validated draft, even if
/// the dialog is closed in the meantime.
#[component]
pub fn RespondDialog(
    dialogs: RwSignal<DialogState>,
    action: String,
    submit_delay: Duration,
) -> impl IntoView {
    let response_text = create_rw_signal(String::new());
    let submission = create_rw_signal(Submission::default());
    let form_ref = create_node_ref::<html::Form>();

    let is_open = move || dialogs.with(|d| d.is_open(Dialog::Respond));
    let pending = move || submission.with(Submission::is_pending);
    let fields = move || {
        dialogs.with(|d| {
            response_text.with(|typed| {
                submission.with(|s| s.form_fields(d.target(Dialog::Respond), typed))
            })
        })
    };

    let close = move || dialogs.update(DialogState::close_respond);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let draft_fields = dialogs.with_untracked(|d| {
            response_text.with_untracked(|typed| {
                submission.with_untracked(|s| s.form_fields(d.target(Dialog::Respond), typed))
            })
        });
        let mut accepted = None;
        submission.update(|s| accepted = Some(s.begin(draft_fields)));
        let draft = match accepted {
            Some(Ok(draft)) => draft,
            Some(Err(e)) => {
                warn!("Response not submitted: {e}");
                return;
            }
            None => return,
        };

        log!(
            "Response submitted for incident {}: {}",
            draft.incident_id,
            draft.response
        );
        set_timeout(
            move || {
                let Some(form) = form_ref.get_untracked() else {
                    error!("response form is no longer mounted");
                    submission.update(Submission::abandon);
                    return;
                };
                if let Err(e) = form.submit() {
                    error!("Error submitting response: {}", bridge::js_err(e));
                    submission.update(Submission::abandon);
                }
            },
            submit_delay,
        );
    };

    view! {
      <div
        id="modal"
        class="modal"
        style:display=move || display(is_open())
        on:click=move |ev: ev::MouseEvent| {
          if ev.target() == ev.current_target() {
            close();
          }
        }
      >
        <div class="modal-content">
          <h3>"Respond to incident"</h3>
          <form
            id="responseForm"
            method="post"
            action=action
            node_ref=form_ref
            on:submit=on_submit
          >
            <input
              type="hidden"
              id="incident-id"
              name="incident_id"
              prop:value=move || fields().incident_id
            />
            <textarea
              id="responseInput"
              name="response"
              placeholder="Describe your response"
              prop:value=move || fields().response
              readonly=pending
              on:input=move |ev| response_text.set(event_target_value(&ev))
            ></textarea>
            <div class="row">
              <button type="button" id="cancelBtn" on:click=move |_| close()>"Cancel"</button>
              <button type="submit" id="submitBtn" disabled=pending>
                {move || if pending() { "Submitting..." } else { "Submit" }}
              </button>
            </div>
          </form>
        </div>
      </div>
    }
}
