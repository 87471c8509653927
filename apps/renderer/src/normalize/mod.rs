//! CV data normalizer — produces a complete, render-safe `Cv` from a
//! possibly-partial, possibly-differently-typed record.
//!
//! The transform is pure and total: no field shape ever raises an error.
//! Anything the normalizer cannot interpret collapses to its type's zero
//! value (empty string, empty list, `false`).
//!
//! List defaults follow the editor's section model: the always-visible
//! sections (work experience, education, skills, languages) default to a
//! single empty-shaped placeholder entry so the edit form has a row to show,
//! while the optional sections (certifications, projects, references)
//! default to empty lists. The renderer's visibility rules know how to skip
//! the placeholders.

use crate::models::cv::{
    Certification, Cv, Education, Language, PersonalInfo, Project, Reference, WorkExperience,
};
use crate::models::record::{
    CertificationRecord, CvRecord, DateField, EducationRecord, LanguageRecord, ProjectRecord,
    ReferenceRecord, WorkExperienceRecord,
};

/// Normalizes a raw CV record into the canonical render-safe shape.
pub fn normalize(record: CvRecord) -> Cv {
    Cv {
        title: text(record.title),
        personal_info: personal_info(record.personal_info),
        summary: text(record.summary),
        work_experience: placeholder_list(record.work_experience, work_experience),
        education: placeholder_list(record.education, education),
        skills: skills(record.skills),
        languages: placeholder_list(record.languages, language),
        certifications: optional_list(record.certifications, certification),
        projects: optional_list(record.projects, project),
        references: optional_list(record.references, reference),
        template_id: text(record.template_id),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field coercion
// ────────────────────────────────────────────────────────────────────────────

fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}

fn flag(value: Option<bool>) -> bool {
    value.unwrap_or(false)
}

/// Coerces a persisted date field to the canonical `YYYY-MM-DD` string form.
///
/// Strings pass through unchanged (the edit form already writes the canonical
/// form), native timestamps are formatted, anything else becomes `""`.
fn date(value: Option<DateField>) -> String {
    match value {
        Some(DateField::Text(s)) => s,
        Some(DateField::Timestamp(ts)) => ts.format("%Y-%m-%d").to_string(),
        Some(DateField::Other(_)) | None => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// List defaults
// ────────────────────────────────────────────────────────────────────────────

/// Absent or empty list → a single empty-shaped placeholder entry.
fn placeholder_list<R, T: Default>(value: Option<Vec<R>>, map: fn(R) -> T) -> Vec<T> {
    match value {
        Some(entries) if !entries.is_empty() => entries.into_iter().map(map).collect(),
        _ => vec![T::default()],
    }
}

/// Absent list → empty list (optional sections only).
fn optional_list<R, T>(value: Option<Vec<R>>, map: fn(R) -> T) -> Vec<T> {
    value
        .map(|entries| entries.into_iter().map(map).collect())
        .unwrap_or_default()
}

fn skills(value: Option<Vec<String>>) -> Vec<String> {
    match value {
        Some(entries) if !entries.is_empty() => entries,
        _ => vec![String::new()],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry normalization
// ────────────────────────────────────────────────────────────────────────────

fn personal_info(value: Option<crate::models::record::PersonalInfoRecord>) -> PersonalInfo {
    let value = value.unwrap_or_default();
    PersonalInfo {
        name: text(value.name),
        email: text(value.email),
        phone: text(value.phone),
        location: text(value.location),
        website: text(value.website),
        linkedin: text(value.linkedin),
        profile_photo: text(value.profile_photo),
    }
}

fn work_experience(value: WorkExperienceRecord) -> WorkExperience {
    WorkExperience {
        company: text(value.company),
        position: text(value.position),
        start_date: date(value.start_date),
        end_date: date(value.end_date),
        description: text(value.description),
        is_current: flag(value.is_current),
    }
}

fn education(value: EducationRecord) -> Education {
    Education {
        institution: text(value.institution),
        degree: text(value.degree),
        field: text(value.field),
        start_date: date(value.start_date),
        end_date: date(value.end_date),
        is_current: flag(value.is_current),
    }
}

fn language(value: LanguageRecord) -> Language {
    Language {
        language: text(value.language),
        level: text(value.level),
    }
}

fn certification(value: CertificationRecord) -> Certification {
    Certification {
        name: text(value.name),
        issuer: text(value.issuer),
        date: date(value.date),
        expiry_date: date(value.expiry_date),
        credential_id: text(value.credential_id),
        credential_url: text(value.credential_url),
    }
}

fn project(value: ProjectRecord) -> Project {
    Project {
        name: text(value.name),
        description: text(value.description),
        technologies: value.technologies.unwrap_or_default(),
        url: text(value.url),
        start_date: date(value.start_date),
        end_date: date(value.end_date),
        is_current: flag(value.is_current),
    }
}

fn reference(value: ReferenceRecord) -> Reference {
    Reference {
        name: text(value.name),
        position: text(value.position),
        company: text(value.company),
        email: text(value.email),
        phone: text(value.phone),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn from_json(json: &str) -> Cv {
        normalize(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_empty_record_fills_every_field() {
        let cv = from_json("{}");

        assert_eq!(cv.title, "");
        assert_eq!(cv.summary, "");
        assert_eq!(cv.personal_info.name, "");
        assert_eq!(cv.personal_info.profile_photo, "");
        assert_eq!(cv.template_id, "");
    }

    #[test]
    fn test_required_sections_get_one_placeholder() {
        let cv = from_json("{}");

        assert_eq!(cv.work_experience.len(), 1);
        assert_eq!(cv.work_experience[0].company, "");
        assert!(!cv.work_experience[0].is_current);
        assert_eq!(cv.education.len(), 1);
        assert_eq!(cv.education[0].institution, "");
        assert_eq!(cv.skills, vec![String::new()]);
        assert_eq!(cv.languages.len(), 1);
        assert_eq!(cv.languages[0].language, "");
    }

    #[test]
    fn test_empty_lists_also_get_placeholder() {
        let cv = from_json(r#"{"workExperience": [], "skills": [], "education": []}"#);

        assert_eq!(cv.work_experience.len(), 1);
        assert_eq!(cv.work_experience[0].company, "");
        assert_eq!(cv.skills, vec![String::new()]);
        assert_eq!(cv.education.len(), 1);
    }

    #[test]
    fn test_optional_sections_default_to_empty() {
        let cv = from_json("{}");

        assert!(cv.certifications.is_empty());
        assert!(cv.projects.is_empty());
        assert!(cv.references.is_empty());
    }

    #[test]
    fn test_string_dates_pass_through_unchanged() {
        let cv = from_json(
            r#"{"workExperience": [{"company": "Acme", "startDate": "2020-01-01", "endDate": "2022-06"}]}"#,
        );

        assert_eq!(cv.work_experience[0].start_date, "2020-01-01");
        assert_eq!(cv.work_experience[0].end_date, "2022-06");
    }

    #[test]
    fn test_native_timestamps_format_to_canonical_form() {
        let cv = from_json(
            r#"{"workExperience": [{"company": "Acme", "startDate": "2020-03-15T09:30:00.000Z"}]}"#,
        );

        assert_eq!(cv.work_experience[0].start_date, "2020-03-15");
    }

    #[test]
    fn test_uninterpretable_dates_become_empty() {
        let cv = from_json(
            r#"{"workExperience": [{"company": "Acme", "startDate": 1577836800, "endDate": {"oops": true}}]}"#,
        );

        assert_eq!(cv.work_experience[0].start_date, "");
        assert_eq!(cv.work_experience[0].end_date, "");
    }

    #[test]
    fn test_stale_end_date_preserved_alongside_is_current() {
        // The renderer ignores the stale value; the normalizer must not drop it.
        let cv = from_json(
            r#"{"workExperience": [{"company": "Acme", "endDate": "2023-01-01", "isCurrent": true}]}"#,
        );

        assert!(cv.work_experience[0].is_current);
        assert_eq!(cv.work_experience[0].end_date, "2023-01-01");
    }

    #[test]
    fn test_populated_entries_survive_intact() {
        let cv = from_json(
            r#"{
                "title": "Backend CV",
                "personalInfo": {"name": "Ayşe Yılmaz", "email": "ayse@example.com"},
                "skills": ["Rust", "Go"],
                "projects": [{"name": "cvtool", "technologies": ["Rust"], "url": "https://example.com"}],
                "templateId": "classic"
            }"#,
        );

        assert_eq!(cv.title, "Backend CV");
        assert_eq!(cv.personal_info.name, "Ayşe Yılmaz");
        assert_eq!(cv.skills, vec!["Rust".to_string(), "Go".to_string()]);
        assert_eq!(cv.projects.len(), 1);
        assert_eq!(cv.projects[0].technologies, vec!["Rust".to_string()]);
        assert_eq!(cv.template_id, "classic");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let first = from_json(
            r#"{
                "personalInfo": {"name": "Ayşe Yılmaz"},
                "workExperience": [{"company": "Acme", "position": "Engineer", "startDate": "2020-01-01", "isCurrent": true}],
                "skills": [],
                "education": [],
                "certifications": [{"name": "CKA", "issuer": "CNCF", "date": "2023-05-01"}],
                "templateId": "modern"
            }"#,
        );

        // Re-normalizing the already-normalized shape must not drift.
        let json = serde_json::to_string(&first).unwrap();
        let second = from_json(&json);
        assert_eq!(first, second);
    }

    #[test]
    fn test_idempotent_on_fully_defaulted_record() {
        let first = from_json("{}");
        let json = serde_json::to_string(&first).unwrap();
        let second = from_json(&json);
        assert_eq!(first, second);
    }
}
