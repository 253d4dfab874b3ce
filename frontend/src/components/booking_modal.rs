use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use shared::{Booking, BookingForm, FormField, Room};

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub day: u32,
    pub form: BookingForm,
    /// Bookings already made for `day`
    pub bookings: Vec<Booking>,
    pub on_change: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let on_name_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((FormField::Name, input.value()));
        })
    };

    let on_room_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit((FormField::Room, select.value()));
        })
    };

    let on_hours_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((FormField::Hours, input.value()));
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <div class="modal" onclick={on_backdrop_click}>
            <div class="modal-content" onclick={on_modal_click}>
                <button type="button" class="close-btn" onclick={on_close_click}>{"Fechar"}</button>
                <h2>{format!("Agendar Sala para o dia {}", props.day)}</h2>

                <form class="booking-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="name">{"Nome:"}</label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            value={props.form.name.clone()}
                            oninput={on_name_input}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="room">{"Sala:"}</label>
                        <select id="room" name="room" onchange={on_room_change} required=true>
                            {for Room::SELECTABLE.into_iter().map(|room| {
                                html! {
                                    <option value={room.to_string()} selected={room == props.form.room}>
                                        {room.to_string()}
                                    </option>
                                }
                            })}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="hours">{"Horário:"}</label>
                        <input
                            type="text"
                            id="hours"
                            name="hours"
                            placeholder="Ex: 12:00 as 13:00"
                            value={props.form.hours.clone()}
                            oninput={on_hours_input}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn btn-primary">{"Agendar"}</button>
                </form>

                <div id="existingBookings" class="existing-bookings">
                    {existing_bookings(&props.bookings)}
                </div>
            </div>
        </div>
    }
}

fn existing_bookings(bookings: &[Booking]) -> Html {
    if bookings.is_empty() {
        return html! { <p>{"Não há agendamentos para este dia."}</p> };
    }

    html! {
        <div>
            <h3>{"Agendamentos:"}</h3>
            {for bookings.iter().map(|booking| html! {
                <div class="booking">
                    <p><strong>{"Nome:"}</strong>{" "}{&booking.name}</p>
                    <p><strong>{"Sala:"}</strong>{" "}{booking.room.as_str()}</p>
                    <p><strong>{"Horário:"}</strong>{" "}{&booking.hours}</p>
                </div>
            })}
        </div>
    }
}
