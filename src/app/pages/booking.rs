//! Seat booking page component.
//!
//! Pick a date, toggle available seats, book them in one request. Booking
//! runs under the global spinner; the seat map reloads afterwards.

use std::collections::BTreeSet;

use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;
use tracing::info;

use crate::api::models::seat_rows;
use crate::api::{BookingRequest, Seat, SeatStatus};
use crate::app::components::Layout;
use crate::app::guards::PrivateRoute;
use crate::app::{use_services, use_translate, use_translate_with};

/// Seat booking page component.
#[component]
pub fn Booking() -> Element {
    rsx! {
        PrivateRoute {
            BookingContent {}
        }
    }
}

#[component]
fn BookingContent() -> Element {
    let services = use_services();
    let t = use_translate();
    let t_with = use_translate_with();

    let mut date = use_signal(|| Utc::now().date_naive());
    let mut selected = use_signal(BTreeSet::<String>::new);
    let mut message = use_signal(|| None::<(bool, String)>); // (is_error, message)

    // Reload seats whenever the date changes
    let mut seats = use_resource({
        let api = services.api.clone();
        move || {
            let api = api.clone();
            let day = date();
            async move { api.list_seats(day).await.map_err(|e| e.to_string()) }
        }
    });

    let on_date_change = move |evt: FormEvent| {
        if let Ok(day) = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d") {
            selected.set(BTreeSet::new());
            message.set(None);
            date.set(day);
        }
    };

    let toggle_seat = move |seat_id: String| {
        let mut current = selected();
        if !current.remove(&seat_id) {
            current.insert(seat_id);
        }
        selected.set(current);
    };

    let book = {
        let services = services.clone();
        let t = t.clone();
        let t_with = t_with.clone();
        move |_| {
            let seat_ids: Vec<String> = selected().into_iter().collect();
            if seat_ids.is_empty() {
                return;
            }
            let request = BookingRequest {
                date: date(),
                seat_ids,
            };
            let services = services.clone();
            let t = t.clone();
            let t_with = t_with.clone();
            spawn(async move {
                let api = services.api.clone();
                let result = services
                    .loading
                    .with_loading(Some(t("booking.booking")), || async move {
                        api.book_seats(&request).await
                    })
                    .await;
                match result {
                    Ok(booking) => {
                        info!("Booked {} seat(s) as {}", booking.seat_ids.len(), booking.id);
                        let text = t_with("booking.confirmed", &[("id", booking.id.as_str())]);
                        message.set(Some((false, text)));
                        selected.set(BTreeSet::new());
                        seats.restart();
                    }
                    Err(e) => message.set(Some((true, e.to_string()))),
                }
            });
        }
    };

    let date_value = date().format("%Y-%m-%d").to_string();
    let selected_count = selected().len();
    let count = selected_count.to_string();
    let selected_text = t_with("booking.selected", &[("count", count.as_str())]);

    let seat_map = match &*seats.read() {
        None => rsx! {
            article { aria_busy: "true", {t("booking.loading_seats")} }
        },
        Some(Err(e)) => rsx! {
            article { p { class: "status-err", "{e}" } }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            article { {t("booking.no_seats")} }
        },
        Some(Ok(list)) => {
            let rows = seat_rows(list);
            let chosen = selected();
            rsx! {
                article {
                    for (row, row_seats) in rows {
                        div { key: "{row}", class: "seat-row",
                            span { class: "row-label", "{row}" }
                            for seat in row_seats {
                                SeatButton {
                                    key: "{seat.id}",
                                    selected: chosen.contains(&seat.id),
                                    seat: seat.clone(),
                                    on_toggle: toggle_seat,
                                }
                            }
                        }
                    }
                    p {
                        small {
                            span { class: "seat", {t("booking.legend.available")} }
                            " "
                            span { class: "seat reserved", {t("booking.legend.reserved")} }
                            " "
                            span { class: "seat blocked", {t("booking.legend.blocked")} }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            title_key: "booking.title".to_string(),
            nav_active: "booking".to_string(),

            h1 { {t("booking.title")} }

            label {
                {t("booking.date")}
                input {
                    r#type: "date",
                    value: "{date_value}",
                    onchange: on_date_change,
                }
            }

            {seat_map}

            div { class: "grid",
                p { "{selected_text}" }
                button {
                    disabled: selected_count == 0,
                    onclick: book,
                    {t("booking.submit")}
                }
            }

            if let Some((is_error, text)) = message() {
                p { class: if is_error { "status-err" } else { "status-ok" }, "{text}" }
            }
        }
    }
}

#[component]
fn SeatButton(seat: Seat, selected: bool, on_toggle: EventHandler<String>) -> Element {
    let class = match (seat.status, selected) {
        (SeatStatus::Available, true) => "seat selected",
        (SeatStatus::Available, false) => "seat outline",
        (SeatStatus::Reserved, _) => "seat reserved",
        (SeatStatus::Blocked, _) => "seat blocked",
    };
    let label = seat.label();
    let seat_id = seat.id.clone();

    rsx! {
        button {
            class: class,
            title: "{label}",
            disabled: !seat.is_bookable(),
            onclick: move |_| on_toggle.call(seat_id.clone()),
            "{seat.number}"
        }
    }
}
