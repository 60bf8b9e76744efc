use crate::bridge;
use incident_model::{build_cards, CardList, DialogState, IncidentCard, Page};
use leptos::logging::{error, log};
use leptos::*;

/// Loads the page's incidents once and renders one card per record.
#[component]
pub fn IncidentCards(
    page: Page,
    dialogs: RwSignal<DialogState>,
    current_user: Option<i64>,
) -> impl IntoView {
    let cards = create_rw_signal(None::<CardList>);

    spawn_local(async move {
        match bridge::fetch_incidents(page).await {
            Ok(list) => {
                log!("loaded {} incidents for {:?}", list.len(), page);
                cards.set(Some(build_cards(page, &list, current_user)));
            }
            Err(e) => error!("Error fetching incidents: {e}"),
        }
    });

    let listed = move || {
        cards.with(|c| {
            c.as_ref()
                .map(|l| l.cards().to_vec())
                .unwrap_or_default()
        })
    };
    let empty_message = move || {
        cards.with(|c| match c {
            Some(CardList::Empty(message)) => Some(*message),
            _ => None,
        })
    };

    view! {
      <div id="incident-cards" class="cards">
        <For
          each=listed
          key=|card| card.id.clone()
          children=move |card| view! { <Card card=card dialogs=dialogs/> }
        />
        <Show when=move || empty_message().is_some() fallback=|| ()>
          <p class="empty">{move || empty_message().unwrap_or_default()}</p>
        </Show>
      </div>
    }
}

#[component]
fn Card(card: IncidentCard, dialogs: RwSignal<DialogState>) -> impl IntoView {
    let IncidentCard {
        id,
        title,
        description,
        created_at,
        status,
    } = card;
    let data_id = id.to_string();
    let respond_id = id.clone();
    let view_id = id;

    view! {
      <article>
        <div class="article-wrapper">
          <div class="article-body">
            <h2>{title}</h2>
            <p>{description}</p>
            {created_at.map(|at| view! { <p class="createdAt">{at}</p> })}
            <span class="status">{status}</span>
            <div class="view-response-btn">
              <a
                href="#"
                class="response-incident"
                data-id=data_id.clone()
                on:click=move |ev| {
                  ev.prevent_default();
                  dialogs.update(|d| d.open_respond(respond_id.clone()));
                }
              >"Response Incident"</a>
              <a
                href="#"
                class="view-responses"
                data-id=data_id
                on:click=move |ev| {
                  ev.prevent_default();
                  dialogs.update(|d| d.open_responses(view_id.clone()));
                }
              >"View Responses"</a>
            </div>
          </div>
        </div>
      </article>
    }
}
