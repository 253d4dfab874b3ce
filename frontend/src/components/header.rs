use yew::prelude::*;
use shared::CalendarMonth;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub calendar: CalendarMonth,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="calendar-header">
            <h1>{props.calendar.today_label()}</h1>
        </header>
    }
}
