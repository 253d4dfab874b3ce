mod components;
mod hooks;
mod services;

use yew::prelude::*;
use components::booking_modal::BookingModal;
use components::calendar::Calendar;
use components::header::Header;
use hooks::use_booking_form::use_booking_form;
use hooks::use_bookings::use_bookings;
use hooks::use_calendar::use_calendar;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let calendar = use_calendar();
    let bookings = use_bookings(&api_client, calendar);
    let booking_form = use_booking_form(&api_client, calendar, bookings.actions.add_booking.clone());

    let modal = match booking_form.state.modal.selected_day() {
        Some(day) => html! {
            <BookingModal
                day={day}
                form={booking_form.state.form.clone()}
                bookings={bookings.bookings.for_day(day).to_vec()}
                on_change={booking_form.actions.change_field.clone()}
                on_submit={booking_form.actions.submit.clone()}
                on_close={booking_form.actions.close.clone()}
            />
        },
        None => html! {},
    };

    html! {
        <div class="App">
            <Header calendar={calendar} />
            <Calendar
                calendar={calendar}
                bookings={bookings.bookings.clone()}
                on_day_click={booking_form.actions.open_day.clone()}
            />
            {modal}
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
