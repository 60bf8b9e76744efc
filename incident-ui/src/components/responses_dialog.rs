use crate::bridge;
use incident_model::dialog::display;
use incident_model::{Dialog, DialogState, Response, ResponsePager};
use leptos::logging::error;
use leptos::*;

/// Shows the responses of one incident, one at a time.
#[component]
pub fn ResponsesDialog(dialogs: RwSignal<DialogState>) -> impl IntoView {
    let pager = create_rw_signal(ResponsePager::<Response>::default());
    let target =
        create_memo(move |_| dialogs.with(|d| d.target(Dialog::Responses).cloned()));

    create_effect(move |_| {
        pager.update(ResponsePager::clear);
        let Some(id) = target.get() else {
            return;
        };
        spawn_local(async move {
            match bridge::fetch_responses(&id).await {
                Ok(list) if dialogs.with_untracked(|d| d.accepts_responses_for(&id)) => {
                    let label = format!("Fetched responses for incident {id}:");
                    bridge::console_dump(&label, &list);
                    pager.update(|p| p.replace(list));
                }
                Ok(_) => {}
                Err(e) => error!("Error fetching responses: {e}"),
            }
        });
    });

    let is_open = move || dialogs.with(|d| d.is_open(Dialog::Responses));
    let close = move || dialogs.update(DialogState::close_responses);

    let heading = move || {
        target
            .get()
            .map(|id| format!("Responses for incident {id}"))
            .unwrap_or_default()
    };
    let position = move || {
        pager.with(|p| {
            p.position()
                .map(|(n, total)| format!("{n} / {total}"))
                .unwrap_or_default()
        })
    };

    let current = move || {
        pager.with(|p| match p.current() {
            Some(r) => view! {
              <div class="response">
                <p>{r.description.clone()}</p>
                <p class="meta">{format!("{} at {}", r.responder_username, r.created_at)}</p>
              </div>
            }
            .into_view(),
            None => view! { <p class="empty">"No responses yet."</p> }.into_view(),
        })
    };

    view! {
      <div
        id="viewModal"
        class="modal"
        style:display=move || display(is_open())
        on:click=move |ev: ev::MouseEvent| {
          if ev.target() == ev.current_target() {
            close();
          }
        }
      >
        <div class="modal-content">
          <h3>
            {heading}
          </h3>
          {current}
          <div class="row">
            <button
              id="prevResponse"
              disabled=move || !pager.with(ResponsePager::has_previous)
              on:click=move |_| pager.update(|p| {
                p.previous();
              })
            >"Previous"</button>
            <span class="meta">
              {position}
            </span>
            <button
              id="nextResponse"
              disabled=move || !pager.with(ResponsePager::has_next)
              on:click=move |_| pager.update(|p| {
                p.next();
              })
            >"Next"</button>
            <button id="closeViewBtn" on:click=move |_| close()>"Close"</button>
          </div>
        </div>
      </div>
    }
}
