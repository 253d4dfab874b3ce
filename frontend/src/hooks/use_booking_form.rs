use std::rc::Rc;
use yew::prelude::*;
use shared::{Booking, BookingFormState, CalendarMonth, FormField};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "use_booking_form";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormStore {
    pub state: BookingFormState,
}

pub enum FormAction {
    Open { calendar: CalendarMonth, day: u32 },
    Close,
    Change(FormField, String),
    Created,
    Failed,
}

impl Reducible for FormStore {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = match action {
            FormAction::Open { calendar, day } => self.state.open(&calendar, day),
            FormAction::Close => self.state.close(),
            FormAction::Change(field, value) => self.state.change(field, value),
            FormAction::Created => self.state.created(),
            FormAction::Failed => self.state.failed(),
        };
        Rc::new(Self { state })
    }
}

pub struct UseBookingFormResult {
    pub state: BookingFormState,
    pub actions: UseBookingFormActions,
}

#[derive(Clone)]
pub struct UseBookingFormActions {
    pub open_day: Callback<u32>,
    pub close: Callback<()>,
    pub change_field: Callback<(FormField, String)>,
    pub submit: Callback<()>,
}

/// Modal visibility, form fields and the create-booking round trip.
///
/// `on_created` receives the selected day and the new booking once the server accepts it.
#[hook]
pub fn use_booking_form(
    api_client: &ApiClient,
    calendar: CalendarMonth,
    on_created: Callback<(u32, Booking)>,
) -> UseBookingFormResult {
    let store = use_reducer(FormStore::default);

    let open_day = {
        let dispatcher = store.dispatcher();
        Callback::from(move |day: u32| {
            dispatcher.dispatch(FormAction::Open { calendar, day });
        })
    };

    let close = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: ()| {
            dispatcher.dispatch(FormAction::Close);
        })
    };

    let change_field = {
        let dispatcher = store.dispatcher();
        Callback::from(move |(field, value): (FormField, String)| {
            dispatcher.dispatch(FormAction::Change(field, value));
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let store = store.clone();

        Callback::from(move |_: ()| {
            let Some(pending) = store.state.submission(&calendar) else {
                return;
            };

            let api_client = api_client.clone();
            let on_created = on_created.clone();
            let dispatcher = store.dispatcher();

            spawn_local(async move {
                match api_client.create_booking(&pending.request).await {
                    Ok(response) => {
                        Logger::info_with_component(COMPONENT, &format!("Booking created: {}", response));
                        on_created.emit((pending.day, pending.booking));
                        dispatcher.dispatch(FormAction::Created);
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Erro ao salvar o agendamento: {}", e));
                        gloo::dialogs::alert(&e.alert_message());
                        dispatcher.dispatch(FormAction::Failed);
                    }
                }
            });
        })
    };

    let actions = UseBookingFormActions {
        open_day,
        close,
        change_field,
        submit,
    };

    UseBookingFormResult {
        state: store.state.clone(),
        actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{BookingForm, ModalState};

    fn calendar() -> CalendarMonth {
        CalendarMonth { year: 2026, month: 10, today: 18 }
    }

    fn filled() -> Rc<FormStore> {
        Rc::new(FormStore::default())
            .reduce(FormAction::Open { calendar: calendar(), day: 20 })
            .reduce(FormAction::Change(FormField::Name, "Ana".to_string()))
            .reduce(FormAction::Change(FormField::Hours, "12:00 as 13:00".to_string()))
    }

    #[test]
    fn test_close_action_resets_form() {
        let store = filled().reduce(FormAction::Close);
        assert_eq!(store.state.modal, ModalState::Closed);
        assert_eq!(store.state.form, BookingForm::default());
    }

    #[test]
    fn test_failed_action_keeps_modal_and_form() {
        let store = filled().reduce(FormAction::Failed);
        assert_eq!(store.state.modal, ModalState::Open { day: 20 });
        assert_eq!(store.state.form.name, "Ana");
        assert_eq!(store.state.form.hours, "12:00 as 13:00");
    }

    #[test]
    fn test_created_action_closes_and_resets() {
        let store = filled().reduce(FormAction::Created);
        assert_eq!(store.state.modal, ModalState::Closed);
        assert_eq!(store.state.form, BookingForm::default());
    }

    #[test]
    fn test_open_action_ignores_past_days() {
        let store = Rc::new(FormStore::default())
            .reduce(FormAction::Open { calendar: calendar(), day: 2 });
        assert_eq!(store.state.modal, ModalState::Closed);
    }
}
