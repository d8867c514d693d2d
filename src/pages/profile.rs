//! Profile page for any authenticated account.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::routes;
use crate::state::session::SessionStore;

/// Profile details — reachable by both roles.
#[component]
pub fn ProfilePage() -> impl IntoView {
    routes::enforce(routes::PROFILE);

    let store = expect_context::<RwSignal<SessionStore>>();
    let profile = LocalResource::new(move || api::fetch_profile(store));

    view! {
        <div class="profile-page">
            <NavBar/>

            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(profile) => {
                                view! {
                                    <section class="profile-page__card">
                                        <h1>{profile.username}</h1>
                                        <p class="profile-page__email">{profile.email}</p>
                                        <p class="profile-page__role">{profile.role}</p>
                                    </section>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="profile-page__error">{err.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
