use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Specialty {
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClinicAddress {
    pub locality: Option<String>,
    pub city: Option<String>,
    pub address_line1: Option<String>,
    pub location: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Clinic {
    #[serde(default)]
    pub name: String,
    pub address: Option<ClinicAddress>,
}

/// A practitioner as served by the directory endpoint
///
/// Only `name`, `specialities`, `experience`, `fees` and the three flags are
/// read by the filtering core. Everything else is carried through for display.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Doctor {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub name_initials: Option<String>,
    #[serde(default, deserialize_with = "deserialize_specialities")]
    pub specialities: Vec<Specialty>,
    pub experience: Option<String>,
    pub fees: Option<String>,
    pub rating: Option<f64>,
    pub reviews: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_null_bool")]
    pub video_consult: bool,
    #[serde(default, deserialize_with = "deserialize_null_bool")]
    pub in_clinic: bool,
    #[serde(default, deserialize_with = "deserialize_null_bool")]
    pub available: bool,
    pub photo: Option<String>,
    pub doctor_introduction: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub languages: Vec<String>,
    pub clinic: Option<Clinic>,
}

impl Doctor {
    /// Iterate over the specialty labels attached to this doctor
    pub fn specialty_names(&self) -> impl Iterator<Item = &str> {
        self.specialities.iter().map(|s| s.name.as_str())
    }

    pub fn has_specialty(&self, label: &str) -> bool {
        self.specialty_names().any(|name| name == label)
    }
}

/// Helper function to deserialize null as empty vector
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

fn deserialize_null_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Null entries and entries without a name are dropped, not rejected
fn deserialize_specialities<'de, D>(deserializer: D) -> Result<Vec<Specialty>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<Vec<Option<Specialty>>>::deserialize(deserializer)?;
    Ok(opt
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .filter(|s| !s.name.is_empty())
        .collect())
}

fn deserialize_null_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<bool>::deserialize(deserializer)?;
    Ok(opt.unwrap_or(false))
}

/// Ids are opaque; some feeds send them as numbers
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

/// Parse a JSON array of doctors
pub fn parse_doctors(text: &str) -> Result<Vec<Doctor>> {
    let doctors: Vec<Doctor> =
        serde_json::from_str(text).context("Failed to parse doctor list")?;
    Ok(doctors)
}

/// Load doctors from a JSON file on disk
pub fn load_doctors_from_file(path: &Path) -> Result<Vec<Doctor>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read doctor list from {}", path.display()))?;
    parse_doctors(&text)
}

/// Whether a configured source should be fetched over HTTP
pub fn is_remote_source(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[derive(Clone)]
pub struct DoctorClient {
    source_url: String,
    client: Client,
}

impl DoctorClient {
    pub fn new(source_url: String) -> Self {
        Self {
            source_url,
            client: Client::new(),
        }
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Fetch the full doctor list in one request
    pub async fn fetch_doctors(&self) -> Result<Vec<Doctor>> {
        let response = self
            .client
            .get(&self.source_url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to fetch doctors")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!("API error ({}): {}", status, error_text));
        }

        let text = response.text().await.context("Failed to read response")?;
        parse_doctors(&text)
    }
}

/// Load doctors from either a URL or a local file
pub async fn load_doctors(source: &str) -> Result<Vec<Doctor>> {
    if is_remote_source(source) {
        DoctorClient::new(source.to_string()).fetch_doctors().await
    } else {
        load_doctors_from_file(Path::new(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let json = r#"[{
            "id": "111",
            "name": "Dr. Raj",
            "name_initials": "DR",
            "specialities": [{"name": "Dentist"}, {"name": "ENT"}],
            "experience": "13 Years of experience",
            "fees": "₹ 500",
            "video_consult": true,
            "in_clinic": false,
            "clinic": {"name": "Smile Care", "address": {"city": "Bangalore"}}
        }]"#;

        let doctors = parse_doctors(json).unwrap();
        assert_eq!(doctors.len(), 1);
        let doc = &doctors[0];
        assert_eq!(doc.id, "111");
        assert_eq!(doc.specialty_names().collect::<Vec<_>>(), vec!["Dentist", "ENT"]);
        assert!(doc.video_consult);
        assert!(!doc.in_clinic);
        assert!(!doc.available);
        assert_eq!(
            doc.clinic.as_ref().and_then(|c| c.address.as_ref()).and_then(|a| a.city.as_deref()),
            Some("Bangalore")
        );
    }

    #[test]
    fn test_parse_missing_and_null_fields() {
        let json = r#"[{"id": 7, "name": "Dr. Anu", "specialities": null, "video_consult": null}]"#;
        let doctors = parse_doctors(json).unwrap();
        let doc = &doctors[0];
        assert_eq!(doc.id, "7");
        assert!(doc.specialities.is_empty());
        assert!(!doc.video_consult);
        assert!(doc.fees.is_none());
        assert!(doc.experience.is_none());
    }

    #[test]
    fn test_parse_skips_null_specialty_entries() {
        let json = r#"[
            {"id": "1", "name": "Dr. A", "specialities": [{"name": null}, {"name": "ENT"}]},
            {"id": "2", "name": "Dr. B", "specialities": [null, {"name": "Dentist"}, {}]}
        ]"#;
        let doctors = parse_doctors(json).unwrap();
        assert_eq!(doctors.len(), 2);
        assert_eq!(doctors[0].specialty_names().collect::<Vec<_>>(), vec!["ENT"]);
        assert_eq!(doctors[1].specialty_names().collect::<Vec<_>>(), vec!["Dentist"]);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_doctors(r#"{"id": "1"}"#).is_err());
    }

    #[test]
    fn test_has_specialty() {
        let doc = Doctor {
            id: "1".to_string(),
            name: "Dr. X".to_string(),
            specialities: vec![Specialty { name: "ENT".to_string() }],
            ..Default::default()
        };
        assert!(doc.has_specialty("ENT"));
        assert!(!doc.has_specialty("ent"));
    }

    #[test]
    fn test_is_remote_source() {
        assert!(is_remote_source("https://example.com/doctors.json"));
        assert!(is_remote_source("http://localhost:8080/api"));
        assert!(!is_remote_source("./doctors.json"));
        assert!(!is_remote_source("/tmp/http-dump.json"));
    }
}
