//! Display formatting for doctor cards
//!
//! Fallback values for fields the feed often leaves out.

use crate::api::Doctor;

pub const DEFAULT_EXPERIENCE_TEXT: &str = "0 years of experience";
pub const DEFAULT_FEE_TEXT: &str = "₹ 500";
pub const DEFAULT_RATING: f64 = 4.5;
pub const DEFAULT_REVIEWS: u64 = 100;
pub const NO_RESULTS_MESSAGE: &str =
    "No doctors found matching your criteria. Try adjusting your filters.";

/// Specialty names joined for the card subtitle
pub fn specialty_line(doctor: &Doctor) -> String {
    doctor.specialty_names().collect::<Vec<_>>().join(", ")
}

pub fn experience_text(doctor: &Doctor) -> &str {
    doctor
        .experience
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_EXPERIENCE_TEXT)
}

pub fn fee_text(doctor: &Doctor) -> &str {
    doctor
        .fees
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_FEE_TEXT)
}

/// "4.5 (100+ ratings)"
pub fn rating_text(doctor: &Doctor) -> String {
    let rating = doctor.rating.filter(|r| *r > 0.0).unwrap_or(DEFAULT_RATING);
    let reviews = doctor.reviews.filter(|r| *r > 0).unwrap_or(DEFAULT_REVIEWS);
    format!("{} ({}+ ratings)", rating, reviews)
}

/// Badge labels in display order
pub fn badges(doctor: &Doctor) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if doctor.video_consult {
        badges.push("Video Consult");
    }
    if doctor.in_clinic {
        badges.push("In Clinic");
    }
    if doctor.available {
        badges.push("Available Today");
    }
    badges
}

/// Clinic name and locality, if any
pub fn clinic_line(doctor: &Doctor) -> Option<String> {
    let clinic = doctor.clinic.as_ref()?;
    let place = clinic
        .address
        .as_ref()
        .and_then(|a| a.locality.as_deref().or(a.city.as_deref()));

    match (clinic.name.is_empty(), place) {
        (true, None) => None,
        (true, Some(place)) => Some(place.to_string()),
        (false, None) => Some(clinic.name.clone()),
        (false, Some(place)) => Some(format!("{}, {}", clinic.name, place)),
    }
}

/// Results header; the count is only shown when non-zero
pub fn results_header(count: usize) -> String {
    if count > 0 {
        format!("Available Doctors ({})", count)
    } else {
        "Available Doctors".to_string()
    }
}

/// Truncate to a display width, appending an ellipsis when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Clinic, ClinicAddress, Specialty};

    fn doctor() -> Doctor {
        Doctor {
            id: "1".to_string(),
            name: "Dr. Raj".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fallbacks() {
        let doc = doctor();
        assert_eq!(experience_text(&doc), DEFAULT_EXPERIENCE_TEXT);
        assert_eq!(fee_text(&doc), DEFAULT_FEE_TEXT);
        assert_eq!(rating_text(&doc), "4.5 (100+ ratings)");
        assert_eq!(specialty_line(&doc), "");
        assert!(badges(&doc).is_empty());
        assert!(clinic_line(&doc).is_none());
    }

    #[test]
    fn test_present_values() {
        let doc = Doctor {
            experience: Some("13 Years of experience".to_string()),
            fees: Some("₹ 1,200".to_string()),
            rating: Some(4.8),
            reviews: Some(250),
            specialities: vec![
                Specialty { name: "ENT".to_string() },
                Specialty { name: "Dentist".to_string() },
            ],
            video_consult: true,
            available: true,
            ..doctor()
        };
        assert_eq!(experience_text(&doc), "13 Years of experience");
        assert_eq!(fee_text(&doc), "₹ 1,200");
        assert_eq!(rating_text(&doc), "4.8 (250+ ratings)");
        assert_eq!(specialty_line(&doc), "ENT, Dentist");
        assert_eq!(badges(&doc), vec!["Video Consult", "Available Today"]);
    }

    #[test]
    fn test_clinic_line() {
        let doc = Doctor {
            clinic: Some(Clinic {
                name: "Smile Care".to_string(),
                address: Some(ClinicAddress {
                    locality: Some("Indiranagar".to_string()),
                    city: Some("Bangalore".to_string()),
                    ..Default::default()
                }),
            }),
            ..doctor()
        };
        assert_eq!(clinic_line(&doc).as_deref(), Some("Smile Care, Indiranagar"));
    }

    #[test]
    fn test_results_header() {
        assert_eq!(results_header(0), "Available Doctors");
        assert_eq!(results_header(12), "Available Doctors (12)");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Dr. Raj", 10), "Dr. Raj");
        assert_eq!(truncate_to_width("Dr. Rajesh Kumar", 8), "Dr. Raj…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
