use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Separator the booking form expects between start and end hour ("12:00 as 13:00")
pub const HOURS_SEPARATOR: &str = " as ";

/// Portuguese month names used by the calendar header
const MONTH_NAMES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
    "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
];

/// Month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => MONTH_NAMES[0],
    }
}

/// Bookable rooms. Values travel on the wire as their Portuguese display names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Room {
    #[default]
    Training,
    Meeting,
    /// Any room name the server sends that the form does not offer
    Other(String),
}

impl Room {
    /// Rooms offered by the booking form, in display order
    pub const SELECTABLE: [Room; 2] = [Room::Training, Room::Meeting];

    pub fn as_str(&self) -> &str {
        match self {
            Room::Training => "Sala de Treinamento",
            Room::Meeting => "Sala de Reunião",
            Room::Other(name) => name,
        }
    }
}

impl From<String> for Room {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Sala de Treinamento" => Room::Training,
            "Sala de Reunião" => Room::Meeting,
            _ => Room::Other(value),
        }
    }
}

impl From<Room> for String {
    fn from(room: Room) -> Self {
        room.as_str().to_string()
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reserved time range for a room on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub name: String,
    pub room: Room,
    /// Display range, e.g. "12:00 as 13:00"
    pub hours: String,
}

/// Appointment as returned by `GET /agendamentos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub nome: String,
    pub sala: Room,
    /// "YYYY-MM-DD HH:MM"
    pub horario_inicio: String,
    /// "YYYY-MM-DD HH:MM"
    pub horario_fim: String,
}

impl AppointmentRecord {
    /// Day of month of the start timestamp, read as a local wall-clock date
    pub fn day(&self) -> Option<u32> {
        day_of_month(&self.horario_inicio)
    }

    /// Convert into the client-side booking shown under a day cell
    pub fn to_booking(&self) -> Booking {
        Booking {
            name: self.nome.clone(),
            room: self.sala.clone(),
            hours: format!(
                "{}{}{}",
                time_part(&self.horario_inicio),
                HOURS_SEPARATOR,
                time_part(&self.horario_fim)
            ),
        }
    }
}

/// Body of `POST /create-appointments`.
///
/// The backend expects the keys `inital_date` and `final_Date` exactly as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub name: String,
    pub room: Room,
    #[serde(rename = "inital_date")]
    pub initial_date: String,
    #[serde(rename = "final_Date")]
    pub final_date: String,
}

/// Error body the backend sends alongside non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Usually a string, but any JSON value is shown as-is
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// The error text to show, if the value is one worth showing.
    /// `null`, `false`, `0` and `""` count as no message.
    pub fn message(&self) -> Option<String> {
        match self.error.as_ref()? {
            serde_json::Value::Null | serde_json::Value::Bool(false) => None,
            serde_json::Value::String(text) if text.is_empty() => None,
            serde_json::Value::String(text) => Some(text.clone()),
            serde_json::Value::Number(number) if number.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }
}

/// Why creating a booking failed. Only used to pick the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CreateBookingError {
    /// The server answered outside the 2xx range
    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },
    /// The request went out but no response came back
    #[error("no response from server: {0}")]
    Network(String),
    /// The request could not be built
    #[error("failed to build request: {0}")]
    Request(String),
}

impl CreateBookingError {
    /// Build a server error from a status code and the raw response body
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|body| body.message());
        CreateBookingError::Server { status, message }
    }

    /// Text for the blocking alert shown after a failed submit
    pub fn alert_message(&self) -> String {
        match self {
            CreateBookingError::Server { message: Some(message), .. } => format!("Erro: {}", message),
            CreateBookingError::Server { message: None, .. } => {
                "Erro: Falha ao salvar o agendamento.".to_string()
            }
            CreateBookingError::Network(_) => {
                "Erro: Não foi possível conectar ao servidor. Por favor, tente novamente.".to_string()
            }
            CreateBookingError::Request(_) => {
                "Ocorreu um erro inesperado. Por favor, tente novamente.".to_string()
            }
        }
    }
}

/// Bookings grouped by day of month, each day in arrival order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingsByDay {
    days: BTreeMap<u32, Vec<Booking>>,
}

impl BookingsByDay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group fetched appointments by the day of their start timestamp.
    /// Records whose start date cannot be read are left out.
    pub fn from_records(records: &[AppointmentRecord]) -> Self {
        let mut grouped = Self::new();
        for record in records {
            if let Some(day) = record.day() {
                grouped.push(day, record.to_booking());
            }
        }
        grouped
    }

    pub fn push(&mut self, day: u32, booking: Booking) {
        self.days.entry(day).or_default().push(booking);
    }

    /// Copy with one booking appended under `day`
    pub fn with_booking(&self, day: u32, booking: Booking) -> Self {
        let mut updated = self.clone();
        updated.push(day, booking);
        updated
    }

    pub fn for_day(&self, day: u32) -> &[Booking] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, day: u32) -> usize {
        self.for_day(day).len()
    }

    pub fn total(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

}

/// Form field names, matching the `name` attributes of the modal inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Room,
    Hours,
}

/// Transient state of the booking modal form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    pub name: String,
    pub room: Room,
    /// Free text, expected as "HH:MM as HH:MM" but never validated
    pub hours: String,
}

impl BookingForm {
    /// Copy with one field replaced
    pub fn with_field(&self, field: FormField, value: String) -> Self {
        let mut updated = self.clone();
        match field {
            FormField::Name => updated.name = value,
            FormField::Room => updated.room = Room::from(value),
            FormField::Hours => updated.hours = value,
        }
        updated
    }

    /// Split the hours text on " as ". A missing end yields an empty string.
    pub fn hour_range(&self) -> (&str, &str) {
        let mut pieces = self.hours.split(HOURS_SEPARATOR);
        let start = pieces.next().unwrap_or_default();
        let end = pieces.next().unwrap_or_default();
        (start, end)
    }

    /// Everything a submit needs: the POST body and the booking to append on success
    pub fn submission(&self, calendar: &CalendarMonth, day: u32) -> PendingBooking {
        let (start, end) = self.hour_range();
        PendingBooking {
            day,
            request: CreateAppointmentRequest {
                name: self.name.clone(),
                room: self.room.clone(),
                initial_date: format_date_time(calendar.year, calendar.month, day, start),
                final_date: format_date_time(calendar.year, calendar.month, day, end),
            },
            booking: Booking {
                name: self.name.clone(),
                room: self.room.clone(),
                hours: self.hours.clone(),
            },
        }
    }
}

/// A submitted booking waiting for the server's answer
#[derive(Debug, Clone, PartialEq)]
pub struct PendingBooking {
    pub day: u32,
    pub request: CreateAppointmentRequest,
    pub booking: Booking,
}

/// Visibility of the booking modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open { day: u32 },
}

impl ModalState {
    pub fn selected_day(&self) -> Option<u32> {
        match self {
            ModalState::Open { day } => Some(*day),
            ModalState::Closed => None,
        }
    }
}

/// Modal visibility together with the form it shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFormState {
    pub modal: ModalState,
    pub form: BookingForm,
}

impl BookingFormState {
    /// Open the modal for `day`. Clicks on past days change nothing.
    pub fn open(&self, calendar: &CalendarMonth, day: u32) -> Self {
        Self {
            modal: calendar.click_day(self.modal, day),
            form: self.form.clone(),
        }
    }

    /// Close the modal. The form always goes back to its defaults.
    pub fn close(&self) -> Self {
        Self::default()
    }

    pub fn change(&self, field: FormField, value: String) -> Self {
        Self {
            modal: self.modal,
            form: self.form.with_field(field, value),
        }
    }

    /// The server accepted the booking
    pub fn created(&self) -> Self {
        self.close()
    }

    /// The server (or the network) rejected the booking: keep everything for another try
    pub fn failed(&self) -> Self {
        self.clone()
    }

    /// Submission for the open day, if any
    pub fn submission(&self, calendar: &CalendarMonth) -> Option<PendingBooking> {
        self.modal
            .selected_day()
            .map(|day| self.form.submission(calendar, day))
    }
}

/// The month shown by the calendar, fixed to the client's date at mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    /// 1-based month
    pub month: u32,
    /// Today's day of month
    pub today: u32,
}

impl CalendarMonth {
    /// Last day of the month: the day before the first of the next month
    pub fn days_in_month(&self) -> u32 {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first| first.pred_opt())
            .map(|last| last.day())
            .unwrap_or(31)
    }

    pub fn days(&self) -> impl Iterator<Item = u32> {
        1..=self.days_in_month()
    }

    pub fn is_past(&self, day: u32) -> bool {
        day < self.today
    }

    pub fn is_bookable(&self, day: u32) -> bool {
        !self.is_past(day) && day >= 1 && day <= self.days_in_month()
    }

    /// Modal state after a click on `day`; past days leave it unchanged
    pub fn click_day(&self, current: ModalState, day: u32) -> ModalState {
        if self.is_bookable(day) {
            ModalState::Open { day }
        } else {
            current
        }
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    /// Header text, e.g. "Hoje: 18 de Outubro de 2026"
    pub fn today_label(&self) -> String {
        format!("Hoje: {} de {} de {}", self.today, self.month_name(), self.year)
    }
}

/// "YYYY-MM-DD HH:MM" from calendar parts and an hour string taken as-is
pub fn format_date_time(year: i32, month: u32, day: u32, hour: &str) -> String {
    format!("{:04}-{:02}-{:02} {}", year, month, day, hour)
}

/// Characters allowed between the date and the time of a timestamp
const DATE_TIME_SEPARATORS: [char; 2] = [' ', 'T'];

/// Day of month of a "YYYY-MM-DD HH:MM" timestamp. Only the date part is read.
pub fn day_of_month(timestamp: &str) -> Option<u32> {
    let date_part = timestamp.trim().split(DATE_TIME_SEPARATORS).next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .ok()
        .map(|date| date.day())
}

/// Time of a "YYYY-MM-DD HH:MM" timestamp, i.e. what follows the date
pub fn time_part(timestamp: &str) -> &str {
    timestamp.trim().split(DATE_TIME_SEPARATORS).nth(1).unwrap_or_default()
}
