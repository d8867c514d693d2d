//! User dashboard: parking lots, booking, and the caller's reservations.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::api::{self, Reservation};
use crate::routes;
use crate::state::session::SessionStore;

/// User home page — lists lots with availability, books spots, and manages
/// the caller's reservations.
#[component]
pub fn DashboardPage() -> impl IntoView {
    routes::enforce(routes::USER_HOME);

    let store = expect_context::<RwSignal<SessionStore>>();
    let status = RwSignal::new(Option::<String>::None);

    // Both lists fetch on mount and refetch after every mutation.
    let lots = LocalResource::new(move || api::fetch_lots(store));
    let reservations = LocalResource::new(move || api::fetch_reservations(store));

    let on_book = Callback::new(move |lot_id: i64| {
        let lots = lots.clone();
        let reservations = reservations.clone();
        leptos::task::spawn_local(async move {
            match api::book_spots(store, lot_id, 1).await {
                Ok(outcome) => {
                    status.set(Some(outcome.msg));
                    lots.refetch();
                    reservations.refetch();
                }
                Err(err) => status.set(Some(err.to_string())),
            }
        });
    });

    let on_park = Callback::new(move |reservation_id: i64| {
        let reservations = reservations.clone();
        leptos::task::spawn_local(async move {
            match api::park_vehicle(store, reservation_id).await {
                Ok(msg) => {
                    status.set(Some(msg));
                    reservations.refetch();
                }
                Err(err) => status.set(Some(err.to_string())),
            }
        });
    });

    let on_vacate = Callback::new(move |reservation_id: i64| {
        let lots = lots.clone();
        let reservations = reservations.clone();
        leptos::task::spawn_local(async move {
            match api::vacate_spot(store, reservation_id).await {
                Ok(msg) => {
                    status.set(Some(msg));
                    lots.refetch();
                    reservations.refetch();
                }
                Err(err) => status.set(Some(err.to_string())),
            }
        });
    });

    view! {
        <div class="dashboard-page">
            <NavBar/>

            {move || status.get().map(|msg| view! { <p class="dashboard-page__status">{msg}</p> })}

            <section class="dashboard-page__lots">
                <h2>"Parking lots"</h2>
                <Suspense fallback=move || view! { <p>"Loading lots..."</p> }>
                    {move || {
                        lots.get()
                            .map(|result| match result {
                                Ok(list) => {
                                    view! {
                                        <ul class="lot-list">
                                            {list
                                                .into_iter()
                                                .map(|lot| {
                                                    let lot_id = lot.id;
                                                    let availability = format!(
                                                        "{} of {} spots free",
                                                        lot.available_spots,
                                                        lot.total_spots,
                                                    );
                                                    view! {
                                                        <li class="lot-list__item">
                                                            <span class="lot-list__name">{lot.location_name}</span>
                                                            <span class="lot-list__address">
                                                                {format!("{}, {}", lot.address, lot.pincode)}
                                                            </span>
                                                            <span class="lot-list__availability">{availability}</span>
                                                            <span class="lot-list__price">
                                                                {format!("{:.2}/hr", lot.price_per_hour)}
                                                            </span>
                                                            <button
                                                                class="btn btn--primary"
                                                                disabled={lot.available_spots == 0}
                                                                on:click=move |_| on_book.run(lot_id)
                                                            >
                                                                "Book"
                                                            </button>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! { <p class="dashboard-page__error">{err.to_string()}</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <section class="dashboard-page__reservations">
                <h2>"My reservations"</h2>
                <Suspense fallback=move || view! { <p>"Loading reservations..."</p> }>
                    {move || {
                        reservations
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    if list.is_empty() {
                                        view! { <p>"No reservations yet."</p> }.into_any()
                                    } else {
                                        view! {
                                            <ul class="reservation-list">
                                                {list
                                                    .into_iter()
                                                    .map(|r| {
                                                        view! {
                                                            <ReservationRow
                                                                reservation=r
                                                                on_park=on_park
                                                                on_vacate=on_vacate
                                                            />
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        }
                                            .into_any()
                                    }
                                }
                                Err(err) => {
                                    view! { <p class="dashboard-page__error">{err.to_string()}</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

/// One reservation with park/vacate actions while it is active.
#[component]
fn ReservationRow(
    reservation: Reservation,
    on_park: Callback<i64>,
    on_vacate: Callback<i64>,
) -> impl IntoView {
    let id = reservation.id;
    let parked = reservation.parking_timestamp.is_some();
    let active = reservation.is_active;

    let lot_name = reservation
        .lot
        .map_or_else(|| "Unknown lot".to_owned(), |lot| lot.location_name);
    let spot_label = reservation
        .spot
        .map_or_else(String::new, |spot| format!("spot {}", spot.spot_number));
    let state = if !active {
        "completed"
    } else if parked {
        "parked"
    } else {
        "booked"
    };
    let cost = reservation
        .parking_cost
        .map(|cost| format!("cost {cost:.2}"));

    view! {
        <li class="reservation-list__item">
            <span class="reservation-list__lot">{lot_name}</span>
            <span class="reservation-list__spot">{spot_label}</span>
            <span class="reservation-list__state">{state}</span>
            <span class="reservation-list__booked-at">
                {reservation.booking_timestamp.unwrap_or_default()}
            </span>
            {cost.map(|text| view! { <span class="reservation-list__cost">{text}</span> })}
            <Show when=move || active && !parked>
                <button class="btn" on:click=move |_| on_park.run(id)>
                    "Park"
                </button>
            </Show>
            <Show when=move || active>
                <button class="btn" on:click=move |_| on_vacate.run(id)>
                    "Vacate"
                </button>
            </Show>
        </li>
    }
}
