//! Admin dashboard page.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::routes;
use crate::state::session::SessionStore;

/// Admin home page — fetches the admin-only greeting. The route guard keeps
/// non-admin sessions out before the fetch ever runs.
#[component]
pub fn AdminPage() -> impl IntoView {
    routes::enforce(routes::ADMIN_HOME);

    let store = expect_context::<RwSignal<SessionStore>>();
    let dashboard = LocalResource::new(move || api::fetch_admin_dashboard(store));

    view! {
        <div class="admin-page">
            <NavBar/>

            <Suspense fallback=move || view! { <p>"Loading dashboard..."</p> }>
                {move || {
                    dashboard
                        .get()
                        .map(|result| match result {
                            Ok(data) => {
                                view! {
                                    <section class="admin-page__greeting">
                                        <h1>{data.message}</h1>
                                        <p>{format!("Signed in as {}", data.logged_in_as)}</p>
                                    </section>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="admin-page__error">{err.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
