//! Section-visibility predicates and date formatting shared by every layout.
//!
//! These rules are identical across all layouts and live here once; layouts
//! only decide ordering and grouping.

use chrono::NaiveDate;

use crate::locale::Locale;
use crate::models::cv::Cv;

// ────────────────────────────────────────────────────────────────────────────
// Section visibility
// ────────────────────────────────────────────────────────────────────────────

/// A list section renders only when it is non-empty AND the FIRST entry's
/// primary identifying field is filled. Placeholder entries injected by the
/// normalizer have an empty primary field, so a section the user never
/// touched stays hidden. A populated entry behind an empty first entry does
/// not resurrect the section.
fn first_entry_filled<T>(entries: &[T], primary: fn(&T) -> &str) -> bool {
    entries
        .first()
        .map(|entry| !primary(entry).trim().is_empty())
        .unwrap_or(false)
}

pub fn show_summary(cv: &Cv) -> bool {
    !cv.summary.trim().is_empty()
}

pub fn show_work_experience(cv: &Cv) -> bool {
    first_entry_filled(&cv.work_experience, |e| e.company.as_str())
}

pub fn show_education(cv: &Cv) -> bool {
    first_entry_filled(&cv.education, |e| e.institution.as_str())
}

pub fn show_skills(cv: &Cv) -> bool {
    first_entry_filled(&cv.skills, |s| s.as_str())
}

pub fn show_languages(cv: &Cv) -> bool {
    first_entry_filled(&cv.languages, |l| l.language.as_str())
}

pub fn show_certifications(cv: &Cv) -> bool {
    first_entry_filled(&cv.certifications, |c| c.name.as_str())
}

pub fn show_projects(cv: &Cv) -> bool {
    first_entry_filled(&cv.projects, |p| p.name.as_str())
}

pub fn show_references(cv: &Cv) -> bool {
    first_entry_filled(&cv.references, |r| r.name.as_str())
}

// ────────────────────────────────────────────────────────────────────────────
// Date formatting
// ────────────────────────────────────────────────────────────────────────────

/// Formats a canonical date string as long-form "month year" ("Ocak 2023").
///
/// Accepts `YYYY-MM-DD` and `YYYY-MM`. Empty input stays empty; anything
/// unparseable passes through unchanged — this is a display function, not a
/// validator.
pub fn long_date(value: &str, locale: Locale) -> String {
    if value.is_empty() {
        return String::new();
    }

    let parsed = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d"));

    match parsed {
        Ok(date) => {
            use chrono::Datelike;
            format!("{} {}", locale.month_name(date.month()), date.year())
        }
        Err(_) => value.to_string(),
    }
}

/// Formats a date range for an entry. The end side reads as the locale's
/// ongoing label when `is_current` is set OR the end date is empty — a stale
/// persisted end date never wins over the flag.
pub fn date_range(start: &str, end: &str, is_current: bool, locale: Locale) -> String {
    let start_text = long_date(start, locale);
    let end_text = if is_current || end.is_empty() {
        locale.ongoing().to_string()
    } else {
        long_date(end, locale)
    };
    format!("{start_text} - {end_text}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::{Cv, WorkExperience};

    fn cv_with_experience(entries: Vec<WorkExperience>) -> Cv {
        Cv {
            work_experience: entries,
            ..Cv::default()
        }
    }

    #[test]
    fn test_placeholder_entry_hides_section() {
        let cv = cv_with_experience(vec![WorkExperience::default()]);
        assert!(!show_work_experience(&cv));
    }

    #[test]
    fn test_filled_first_entry_shows_section() {
        let cv = cv_with_experience(vec![WorkExperience {
            company: "Acme".into(),
            ..WorkExperience::default()
        }]);
        assert!(show_work_experience(&cv));
    }

    #[test]
    fn test_empty_first_entry_suppresses_populated_second() {
        // First-entry rule: the populated second entry does not resurrect the section.
        let cv = cv_with_experience(vec![
            WorkExperience::default(),
            WorkExperience {
                company: "Acme".into(),
                ..WorkExperience::default()
            },
        ]);
        assert!(!show_work_experience(&cv));
    }

    #[test]
    fn test_skills_first_string_rule() {
        let mut cv = Cv::default();
        cv.skills = vec![String::new()];
        assert!(!show_skills(&cv));

        cv.skills = vec!["Rust".into()];
        assert!(show_skills(&cv));

        cv.skills = vec!["".into(), "Rust".into()];
        assert!(!show_skills(&cv));
    }

    #[test]
    fn test_optional_sections_hidden_when_empty() {
        let cv = Cv::default();
        assert!(!show_certifications(&cv));
        assert!(!show_projects(&cv));
        assert!(!show_references(&cv));
    }

    #[test]
    fn test_summary_whitespace_is_hidden() {
        let mut cv = Cv::default();
        cv.summary = "   ".into();
        assert!(!show_summary(&cv));
    }

    #[test]
    fn test_long_date_full_and_month_precision() {
        assert_eq!(long_date("2023-01-15", Locale::Tr), "Ocak 2023");
        assert_eq!(long_date("2023-01", Locale::Tr), "Ocak 2023");
        assert_eq!(long_date("2020-09-01", Locale::En), "September 2020");
    }

    #[test]
    fn test_long_date_empty_and_unparseable() {
        assert_eq!(long_date("", Locale::Tr), "");
        assert_eq!(long_date("yakında", Locale::Tr), "yakında");
    }

    #[test]
    fn test_date_range_ongoing_when_current() {
        let range = date_range("2020-01-01", "", true, Locale::Tr);
        assert_eq!(range, "Ocak 2020 - Devam ediyor");
    }

    #[test]
    fn test_date_range_stale_end_date_ignored_when_current() {
        let range = date_range("2020-01-01", "2023-06-01", true, Locale::Tr);
        assert_eq!(range, "Ocak 2020 - Devam ediyor");
    }

    #[test]
    fn test_date_range_empty_end_reads_ongoing() {
        let range = date_range("2020-01-01", "", false, Locale::Tr);
        assert_eq!(range, "Ocak 2020 - Devam ediyor");
    }

    #[test]
    fn test_date_range_closed() {
        let range = date_range("2020-01-01", "2022-06-01", false, Locale::En);
        assert_eq!(range, "January 2020 - June 2022");
    }
}
