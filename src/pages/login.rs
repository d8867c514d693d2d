//! Login page for both admins and users.

use leptos::prelude::*;

use crate::net::api;
use crate::routes;
use crate::state::session::{Role, SessionStore};

/// Login form. A successful login stores the issued credentials; the page's
/// own guard then bounces the now-authenticated visitor to the role home, so
/// no explicit navigation is needed here.
#[component]
pub fn LoginPage() -> impl IntoView {
    routes::enforce(routes::LOGIN);

    let store = expect_context::<RwSignal<SessionStore>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        leptos::task::spawn_local(async move {
            let result =
                api::login(store, &username.get_untracked(), &password.get_untracked()).await;
            match result {
                Ok(issued) => match issued.role.parse::<Role>() {
                    Ok(role) => {
                        store.update(|s| s.login(issued.access_token, role, issued.username));
                    }
                    Err(_) => error.set(Some("Server returned an unknown role.".to_owned())),
                },
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"ParkHub"</h1>
            <p>"Parking lot reservations"</p>
            <form class="auth-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary">
                    "Log in"
                </button>
            </form>
            {move || error.get().map(|msg| view! { <p class="auth-form__error">{msg}</p> })}
            <p>
                <a href=routes::REGISTER>"Create an account"</a>
            </p>
        </div>
    }
}
