//! Registration page for new user accounts.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::routes;
use crate::state::session::SessionStore;

/// Registration form. Accounts are always created with the `user` role; the
/// server rejects duplicate usernames and emails with a 409 message.
#[component]
pub fn RegisterPage() -> impl IntoView {
    routes::enforce(routes::REGISTER);

    let store = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::register(
                store,
                &username.get_untracked(),
                &email.get_untracked(),
                &password.get_untracked(),
            )
            .await;
            match result {
                Ok(_) => navigate(routes::LOGIN, NavigateOptions::default()),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="register-page">
            <h1>"Create an account"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary">
                    "Register"
                </button>
            </form>
            {move || error.get().map(|msg| view! { <p class="auth-form__error">{msg}</p> })}
            <p>
                <a href=routes::LOGIN>"Back to login"</a>
            </p>
        </div>
    }
}
