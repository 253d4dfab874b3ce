use gloo::net::http::Request;
use shared::{AppointmentRecord, CreateAppointmentRequest, CreateBookingError};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// API client for the booking backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client for `BOOKING_API_URL` (set at build time) or the local default
    pub fn new() -> Self {
        Self::with_base_url(option_env!("BOOKING_API_URL").unwrap_or(DEFAULT_BASE_URL).to_string())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Get every appointment the backend knows about
    pub async fn fetch_bookings(&self) -> Result<Vec<AppointmentRecord>, String> {
        let url = self.url("/agendamentos");

        match Request::get(&url).send().await {
            Ok(response) => {
                if !response.ok() {
                    let status = response.status();
                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    return Err(format!("Server error {}: {}", status, error_text));
                }
                match response.json::<Vec<AppointmentRecord>>().await {
                    Ok(data) => Ok(data),
                    Err(e) => Err(format!("Failed to parse bookings: {}", e)),
                }
            }
            Err(e) => Err(format!("Failed to fetch bookings: {}", e)),
        }
    }

    /// Create one appointment. Returns the raw response body on success.
    pub async fn create_booking(&self, request: &CreateAppointmentRequest) -> Result<String, CreateBookingError> {
        let url = self.url("/create-appointments");

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| CreateBookingError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| CreateBookingError::Network(e.to_string()))?;

        let body = response.text().await.unwrap_or_default();
        if response.ok() {
            Ok(body)
        } else {
            Err(CreateBookingError::from_response(response.status(), &body))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let client = ApiClient::with_base_url("http://rooms.local:8080/".to_string());
        assert_eq!(client.base_url(), "http://rooms.local:8080");
        assert_eq!(client.url("/agendamentos"), "http://rooms.local:8080/agendamentos");
    }

    #[test]
    fn test_default_client_targets_configured_backend() {
        let client = ApiClient::default();
        let expected = option_env!("BOOKING_API_URL").unwrap_or(DEFAULT_BASE_URL);
        assert_eq!(client.base_url(), expected.trim_end_matches('/'));
    }
}
