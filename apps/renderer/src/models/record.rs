//! Raw CV record shape as the document store hands it over.
//!
//! Every field is optional: records created by older versions of the editor
//! predate the certifications/projects/references sections, form submits may
//! omit whole sections, and date fields arrive either as native timestamps
//! (persisted date values) or as plain `YYYY-MM-DD` strings (form state).
//! Wire names are camelCase — a persisted contract, do not rename.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// A date field as persisted: a native timestamp, a plain string, or
/// something the editor never should have written.
///
/// Variant order matters for `untagged`: RFC 3339-encoded timestamps must be
/// tried first so stored date values normalize to `YYYY-MM-DD`, while
/// date-only form strings fail the timestamp parse and pass through as text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DateField {
    Timestamp(DateTime<Utc>),
    Text(String),
    Other(Value),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvRecord {
    pub title: Option<String>,
    pub personal_info: Option<PersonalInfoRecord>,
    pub summary: Option<String>,
    pub work_experience: Option<Vec<WorkExperienceRecord>>,
    pub education: Option<Vec<EducationRecord>>,
    pub skills: Option<Vec<String>>,
    pub languages: Option<Vec<LanguageRecord>>,
    pub certifications: Option<Vec<CertificationRecord>>,
    pub projects: Option<Vec<ProjectRecord>>,
    pub references: Option<Vec<ReferenceRecord>>,
    pub template_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub profile_photo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperienceRecord {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<DateField>,
    pub end_date: Option<DateField>,
    pub description: Option<String>,
    pub is_current: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationRecord {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<DateField>,
    pub end_date: Option<DateField>,
    pub is_current: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageRecord {
    pub language: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationRecord {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<DateField>,
    pub expiry_date: Option<DateField>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub url: Option<String>,
    pub start_date: Option<DateField>,
    pub end_date: Option<DateField>,
    pub is_current: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceRecord {
    pub name: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes() {
        let record: CvRecord = serde_json::from_str("{}").unwrap();
        assert!(record.title.is_none());
        assert!(record.work_experience.is_none());
        assert!(record.template_id.is_none());
    }

    #[test]
    fn test_date_field_plain_string_stays_text() {
        let record: WorkExperienceRecord =
            serde_json::from_str(r#"{"startDate": "2020-01-01"}"#).unwrap();
        match record.start_date {
            Some(DateField::Text(s)) => assert_eq!(s, "2020-01-01"),
            other => panic!("expected Text, got {other:?}"),
        }
    }

    #[test]
    fn test_date_field_rfc3339_becomes_timestamp() {
        let record: WorkExperienceRecord =
            serde_json::from_str(r#"{"startDate": "2020-01-01T00:00:00.000Z"}"#).unwrap();
        assert!(matches!(record.start_date, Some(DateField::Timestamp(_))));
    }

    #[test]
    fn test_date_field_number_falls_to_other() {
        let record: WorkExperienceRecord =
            serde_json::from_str(r#"{"startDate": 1577836800}"#).unwrap();
        assert!(matches!(record.start_date, Some(DateField::Other(_))));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        // Older records carry store metadata (_id, timestamps) the renderer ignores.
        let json = r#"{"_id": "abc123", "userId": "u1", "title": "My CV", "createdAt": "2024-01-01T10:00:00Z"}"#;
        let record: CvRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title.as_deref(), Some("My CV"));
    }
}
