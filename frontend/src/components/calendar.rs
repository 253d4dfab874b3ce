use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{BookingsByDay, CalendarMonth};

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub calendar: CalendarMonth,
    pub bookings: BookingsByDay,
    pub on_day_click: Callback<u32>,
}

/// CSS classes for one day cell
pub fn day_class(calendar: &CalendarMonth, bookings: &BookingsByDay, day: u32) -> String {
    let mut classes = vec!["day"];
    if calendar.is_past(day) {
        classes.push("past");
    }
    if day == calendar.today {
        classes.push("today");
    }
    if bookings.count(day) > 0 {
        classes.push("has-bookings");
    }
    classes.join(" ")
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let calendar = props.calendar;

    let day_cells = calendar.days().map(|day| {
        let booking_count = props.bookings.count(day);

        // Past days render but ignore clicks
        let onclick = {
            let on_day_click = props.on_day_click.clone();
            Callback::from(move |_: MouseEvent| {
                if calendar.is_bookable(day) {
                    on_day_click.emit(day);
                }
            })
        };

        html! {
            <div key={day} class={day_class(&calendar, &props.bookings, day)} {onclick}>
                <span class="day-number">{day}</span>
                {if booking_count > 0 {
                    html! { <span class="booking-count">{booking_count}</span> }
                } else {
                    html! {}
                }}
            </div>
        }
    });

    html! {
        <div class="calendar">
            {for day_cells}
        </div>
    }
}
