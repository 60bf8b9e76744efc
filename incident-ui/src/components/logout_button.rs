use crate::bridge;
use incident_model::endpoint::HOME_PATH;
use leptos::logging::error;
use leptos::*;

#[component]
pub fn LogoutButton() -> impl IntoView {
    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let result = match bridge::logout().await {
                Ok(()) => bridge::redirect(HOME_PATH),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                error!("Error logging out: {e}");
            }
        });
    };

    view! { <a href="#" id="logoutBtn" class="logout" on:click=on_click>"Logout"</a> }
}
