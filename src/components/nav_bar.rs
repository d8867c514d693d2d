//! Top navigation bar for authenticated pages.

use leptos::prelude::*;

use crate::state::session::SessionStore;

/// Navigation bar — shows the signed-in identity, links to the role's pages,
/// and a logout button. Logging out clears the session; the page's own guard
/// then bounces to the login page.
#[component]
pub fn NavBar() -> impl IntoView {
    let store = expect_context::<RwSignal<SessionStore>>();

    let on_logout = move |_| store.update(|s| s.logout());

    view! {
        <header class="nav-bar">
            <span class="nav-bar__brand">"ParkHub"</span>
            <nav class="nav-bar__links">
                {move || {
                    store.get().current().role().map(|role| {
                        view! {
                            <a href=role.home_path()>"Home"</a>
                            <a href="/profile">"Profile"</a>
                        }
                    })
                }}
            </nav>
            <div class="nav-bar__session">
                <span class="nav-bar__user">
                    {move || store.get().current().username().map(str::to_owned)}
                </span>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </header>
    }
}
