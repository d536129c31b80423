//! Doctor Finder Library
//!
//! Exposes the filtering core and record model for testing and for the TUI

pub mod api;
pub mod config;
pub mod logic;
pub mod model;

/// Consultation mode filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsultationType {
    VideoConsult, // Doctor offers video consultation
    InClinic,     // Doctor sees patients in person
}

impl ConsultationType {
    /// Literal used in the query string and on screen
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationType::VideoConsult => "Video Consult",
            ConsultationType::InClinic => "In Clinic",
        }
    }

    /// Parse the query string literal; anything else is unrecognized
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "Video Consult" => Some(ConsultationType::VideoConsult),
            "In Clinic" => Some(ConsultationType::InClinic),
            _ => None,
        }
    }
}

/// Sort order for the doctor list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortBy {
    Fees,       // Consultation fee, low to high
    Experience, // Years of experience, high to low
}

impl SortBy {
    /// Literal used in the query string
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Fees => "fees",
            SortBy::Experience => "experience",
        }
    }

    /// Human-readable label for the filter panel
    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Fees => "Consultation Fees (Low to High)",
            SortBy::Experience => "Experience (High to Low)",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "fees" => Some(SortBy::Fees),
            "experience" => Some(SortBy::Experience),
            _ => None,
        }
    }
}
