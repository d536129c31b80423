//! Load error classification
//!
//! Turns a failed record load into something the status banner can show.

use anyhow::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,     // HTTP 404 or missing file
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    InvalidData,  // Response was not a doctor list
    Other,
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if let Some(status) = reqwest_err.status() {
                return match status.as_u16() {
                    404 => ErrorType::NotFound,
                    500..=599 => ErrorType::ServerError,
                    _ => ErrorType::Other,
                };
            }
            if reqwest_err.is_timeout() {
                return ErrorType::Timeout;
            }
        }
        if cause.downcast_ref::<serde_json::Error>().is_some() {
            return ErrorType::InvalidData;
        }
        if let Some(io_err) = cause.downcast_ref::<std::io::Error>() {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                return ErrorType::NotFound;
            }
        }
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Root cause of the error chain, the most specific message available
pub fn format_error_message(error: &Error) -> String {
    error
        .chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| error.to_string())
}

/// One-line banner text for a failed load
pub fn load_error_banner(error: &Error) -> String {
    let hint = match classify_error(error) {
        ErrorType::ConnectionRefused => "server refused the connection",
        ErrorType::Timeout => "request timed out",
        ErrorType::NotFound => "source not found",
        ErrorType::ServerError => "server error",
        ErrorType::NetworkError => "network unreachable",
        ErrorType::InvalidData => "response was not a doctor list",
        ErrorType::Other => "unexpected error",
    };
    format!(
        "Error loading doctors ({}): {}. Please try again later.",
        hint,
        format_error_message(error)
    )
}
