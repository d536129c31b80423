//! Plain-text rendering of the current results, for `--print`

use std::fmt::Write;

use docfinder::logic::formatting;
use docfinder::model::Model;

/// Render the visible list as text, one card per doctor
pub fn render_report(model: &Model) -> String {
    let mut out = String::new();
    let visible = &model.directory.visible;

    let _ = writeln!(out, "{}", formatting::results_header(visible.len()));
    let _ = writeln!(out, "{}", model.shareable_url());
    let _ = writeln!(out);

    if visible.is_empty() {
        let _ = writeln!(out, "{}", formatting::NO_RESULTS_MESSAGE);
        return out;
    }

    for doctor in visible {
        let _ = writeln!(out, "{}", doctor.name);
        let specialties = formatting::specialty_line(doctor);
        if !specialties.is_empty() {
            let _ = writeln!(out, "  {}", specialties);
        }
        let _ = writeln!(out, "  {}", formatting::experience_text(doctor));
        if let Some(clinic) = formatting::clinic_line(doctor) {
            let _ = writeln!(out, "  {}", clinic);
        }
        let _ = writeln!(
            out,
            "  {} | {}",
            formatting::rating_text(doctor),
            formatting::fee_text(doctor)
        );
        let badges = formatting::badges(doctor);
        if !badges.is_empty() {
            let _ = writeln!(out, "  {}", badges.join(" · "));
        }
        let _ = writeln!(out);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use docfinder::api::{Doctor, Specialty};

    fn model_with(doctors: Vec<Doctor>) -> Model {
        let mut model = Model::new(false, 3, "http://localhost/doctors".to_string());
        model.set_doctors(doctors);
        model
    }

    #[test]
    fn test_report_lists_cards_in_order() {
        let model = model_with(vec![
            Doctor {
                id: "1".to_string(),
                name: "Dr. Raj".to_string(),
                specialities: vec![Specialty { name: "Dentist".to_string() }],
                fees: Some("₹ 800".to_string()),
                video_consult: true,
                ..Default::default()
            },
            Doctor {
                id: "2".to_string(),
                name: "Dr. Anu".to_string(),
                ..Default::default()
            },
        ]);

        let report = render_report(&model);
        assert!(report.starts_with("Available Doctors (2)\nhttp://localhost/doctors\n"));
        assert!(report.contains("  Dentist\n"));
        assert!(report.contains("  4.5 (100+ ratings) | ₹ 800\n"));
        assert!(report.contains("  Video Consult\n"));
        let raj = report.find("Dr. Raj").unwrap();
        let anu = report.find("Dr. Anu").unwrap();
        assert!(raj < anu);
    }

    #[test]
    fn test_report_empty_results() {
        let mut model = model_with(Vec::new());
        model.restore_from_query("search=nobody");
        let report = render_report(&model);
        assert!(report.starts_with("Available Doctors\n"));
        assert!(report.contains("?search=nobody"));
        assert!(report.contains(formatting::NO_RESULTS_MESSAGE));
    }
}
