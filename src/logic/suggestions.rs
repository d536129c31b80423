//! Autocomplete suggestions for the search box

use crate::api::Doctor;
use crate::logic::filtering::name_matches;

/// Number of suggestions shown when nothing else is configured
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// First `limit` doctors (in input order) whose name contains `query`
///
/// Nothing is suggested for an empty query.
///
/// # Examples
/// ```
/// use docfinder::api::Doctor;
/// use docfinder::logic::suggestions::suggest;
///
/// let doctors: Vec<Doctor> = ["Dr. Raj", "Dr. Ravi", "Dr. Anu"]
///     .iter()
///     .enumerate()
///     .map(|(i, name)| Doctor { id: i.to_string(), name: name.to_string(), ..Default::default() })
///     .collect();
///
/// let names: Vec<_> = suggest(&doctors, "ra", 3).into_iter().map(|d| d.name).collect();
/// assert_eq!(names, vec!["Dr. Raj", "Dr. Ravi"]);
/// assert!(suggest(&doctors, "", 3).is_empty());
/// ```
pub fn suggest(doctors: &[Doctor], query: &str, limit: usize) -> Vec<Doctor> {
    if query.is_empty() {
        return Vec::new();
    }

    doctors
        .iter()
        .filter(|doctor| name_matches(query, &doctor.name))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> Vec<Doctor> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Doctor {
                id: i.to_string(),
                name: name.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn names(doctors: &[Doctor]) -> Vec<&str> {
        doctors.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_suggests_nothing() {
        assert!(suggest(&named(&["Dr. Raj"]), "", 3).is_empty());
    }

    #[test]
    fn test_keeps_input_order() {
        let doctors = named(&["Dr. Raj", "Dr. Ravi", "Dr. Anu"]);
        assert_eq!(names(&suggest(&doctors, "ra", 3)), vec!["Dr. Raj", "Dr. Ravi"]);
    }

    #[test]
    fn test_cutoff() {
        let doctors = named(&["Dr. A1", "Dr. A2", "Dr. A3", "Dr. A4", "Dr. A5"]);
        assert_eq!(names(&suggest(&doctors, "dr", 3)), vec!["Dr. A1", "Dr. A2", "Dr. A3"]);
        assert_eq!(suggest(&doctors, "dr", DEFAULT_SUGGESTION_LIMIT).len(), 3);
    }

    #[test]
    fn test_zero_limit() {
        assert!(suggest(&named(&["Dr. Raj"]), "raj", 0).is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let doctors = named(&["DR. MEERA", "dr. meena"]);
        assert_eq!(suggest(&doctors, "Mee", 3).len(), 2);
    }

    #[test]
    fn test_no_match() {
        assert!(suggest(&named(&["Dr. Raj"]), "zzz", 3).is_empty());
    }
}
