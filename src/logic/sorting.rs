//! Sorting comparison logic
//!
//! Pure functions for ordering doctors by fee or experience.

use crate::api::Doctor;
use crate::logic::numeric::extract_leading_integer;
use crate::SortBy;
use std::cmp::Ordering;

/// Numeric consultation fee, 0 when missing or unparseable
pub fn fee_value(doctor: &Doctor) -> u64 {
    extract_leading_integer(doctor.fees.as_deref())
}

/// Years of experience, 0 when missing or unparseable
pub fn experience_value(doctor: &Doctor) -> u64 {
    extract_leading_integer(doctor.experience.as_deref())
}

/// Compare two doctors according to the given sort order
///
/// # Sort Rules
/// - Fees: ascending
/// - Experience: descending
///
/// Equal keys compare `Equal` so that a stable sort keeps input order.
pub fn compare_doctors(a: &Doctor, b: &Doctor, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Fees => fee_value(a).cmp(&fee_value(b)),
        SortBy::Experience => experience_value(b).cmp(&experience_value(a)),
    }
}

/// Sort in place with a stable sort; `None` leaves the order untouched
pub fn sort_doctors(doctors: &mut [Doctor], sort_by: Option<SortBy>) {
    if let Some(sort_by) = sort_by {
        doctors.sort_by(|a, b| compare_doctors(a, b, sort_by));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_doctor(id: &str, fees: Option<&str>, experience: Option<&str>) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: format!("Dr. {}", id),
            fees: fees.map(str::to_string),
            experience: experience.map(str::to_string),
            ..Default::default()
        }
    }

    fn ids(doctors: &[Doctor]) -> Vec<&str> {
        doctors.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_compare_fees_ascending() {
        let cheap = make_doctor("a", Some("₹ 300"), None);
        let pricey = make_doctor("b", Some("₹ 1,200"), None);
        assert_eq!(compare_doctors(&cheap, &pricey, SortBy::Fees), Ordering::Less);
        assert_eq!(compare_doctors(&pricey, &cheap, SortBy::Fees), Ordering::Greater);
    }

    #[test]
    fn test_compare_experience_descending() {
        let junior = make_doctor("a", None, Some("3 Years of experience"));
        let senior = make_doctor("b", None, Some("20 Years of experience"));
        assert_eq!(
            compare_doctors(&senior, &junior, SortBy::Experience),
            Ordering::Less
        );
    }

    #[test]
    fn test_missing_fee_sorts_as_zero() {
        let mut doctors = vec![
            make_doctor("a", Some("₹ 500"), None),
            make_doctor("b", None, None),
        ];
        sort_doctors(&mut doctors, Some(SortBy::Fees));
        assert_eq!(ids(&doctors), vec!["b", "a"]);
    }

    #[test]
    fn test_fee_sort_is_stable() {
        let mut doctors = vec![
            make_doctor("a", Some("₹ 500"), None),
            make_doctor("b", Some("₹ 300"), None),
            make_doctor("c", Some("500"), None),
            make_doctor("d", Some("Rs. 300/-"), None),
        ];
        sort_doctors(&mut doctors, Some(SortBy::Fees));
        assert_eq!(ids(&doctors), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_experience_sort_is_stable() {
        let mut doctors = vec![
            make_doctor("a", None, Some("5 years")),
            make_doctor("b", None, Some("10 years")),
            make_doctor("c", None, None),
            make_doctor("d", None, Some("10 Years of experience")),
            make_doctor("e", None, Some("unknown")),
        ];
        sort_doctors(&mut doctors, Some(SortBy::Experience));
        assert_eq!(ids(&doctors), vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn test_no_sort_keeps_order() {
        let mut doctors = vec![
            make_doctor("z", Some("900"), None),
            make_doctor("y", Some("100"), None),
        ];
        sort_doctors(&mut doctors, None);
        assert_eq!(ids(&doctors), vec!["z", "y"]);
    }
}
