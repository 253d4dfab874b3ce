use std::rc::Rc;
use yew::prelude::*;
use shared::{Booking, BookingsByDay, CalendarMonth};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "use_bookings";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingsState {
    pub by_day: BookingsByDay,
}

pub enum BookingsAction {
    /// Replace everything with a fresh server response
    Loaded(BookingsByDay),
    /// Append one booking the server just accepted
    Added { day: u32, booking: Booking },
}

impl Reducible for BookingsState {
    type Action = BookingsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BookingsAction::Loaded(by_day) => Rc::new(Self { by_day }),
            BookingsAction::Added { day, booking } => Rc::new(Self {
                by_day: self.by_day.with_booking(day, booking),
            }),
        }
    }
}

pub struct UseBookingsResult {
    pub bookings: BookingsByDay,
    pub actions: UseBookingsActions,
}

#[derive(Clone)]
pub struct UseBookingsActions {
    pub add_booking: Callback<(u32, Booking)>,
}

#[hook]
pub fn use_bookings(api_client: &ApiClient, calendar: CalendarMonth) -> UseBookingsResult {
    let state = use_reducer(BookingsState::default);

    // Load once per mount; year/month never change afterwards
    use_effect_with((calendar.year, calendar.month), {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();

        move |_| {
            spawn_local(async move {
                match api_client.fetch_bookings().await {
                    Ok(records) => {
                        let by_day = BookingsByDay::from_records(&records);
                        let skipped = records.len() - by_day.total();
                        if skipped > 0 {
                            Logger::warn_with_component(
                                COMPONENT,
                                &format!("Skipped {} bookings with unreadable start dates", skipped),
                            );
                        }
                        Logger::debug_with_component(
                            COMPONENT,
                            &format!("Loaded {} bookings", by_day.total()),
                        );
                        dispatcher.dispatch(BookingsAction::Loaded(by_day));
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Erro ao carregar agendamentos de {}: {}", api_client.base_url(), e),
                        );
                    }
                }
            });
            || ()
        }
    });

    let add_booking = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(day, booking): (u32, Booking)| {
            dispatcher.dispatch(BookingsAction::Added { day, booking });
        })
    };

    UseBookingsResult {
        bookings: state.by_day.clone(),
        actions: UseBookingsActions { add_booking },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Room;

    fn booking(name: &str) -> Booking {
        Booking {
            name: name.to_string(),
            room: Room::Meeting,
            hours: "09:00 as 10:00".to_string(),
        }
    }

    #[test]
    fn test_loaded_replaces_previous_state() {
        let mut stale = BookingsByDay::new();
        stale.push(3, booking("Old"));
        let state = Rc::new(BookingsState { by_day: stale });

        let mut fresh = BookingsByDay::new();
        fresh.push(20, booking("New"));
        let state = state.reduce(BookingsAction::Loaded(fresh));

        assert_eq!(state.by_day.count(3), 0);
        assert_eq!(state.by_day.count(20), 1);
    }

    #[test]
    fn test_added_appends_under_day() {
        let state = Rc::new(BookingsState::default());
        let state = state.reduce(BookingsAction::Added { day: 20, booking: booking("Ana") });
        let state = state.reduce(BookingsAction::Added { day: 20, booking: booking("Bruno") });

        let day = state.by_day.for_day(20);
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].name, "Ana");
        assert_eq!(day[1].name, "Bruno");
    }
}
