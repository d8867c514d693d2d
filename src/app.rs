//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, login::LoginPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::routes;
use crate::state::session::SessionStore;
use crate::storage;

/// Root application component.
///
/// Restores the session from durable storage exactly once, provides it as a
/// shared signal, and declares the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::load(storage::default_storage()));
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/parkhub.css"/>
        <Title text="ParkHub"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=routes::LOGIN/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
