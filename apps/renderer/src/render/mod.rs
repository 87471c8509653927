// Template rendering engine.
// Pure mapping: (normalized CV, template identifier) to render tree.
// Sixteen persisted identifiers dispatch onto the distinct layouts, with
// several identifiers aliasing a shared layout.

pub mod helpers;
pub mod layouts;
pub mod tree;

use tracing::debug;

use crate::locale::Messages;
use crate::models::cv::Cv;

pub use tree::{to_html, to_html_document, Node};

// ────────────────────────────────────────────────────────────────────────────
// Template identifiers
// ────────────────────────────────────────────────────────────────────────────

/// The sixteen template identifiers persisted on CV records.
///
/// The string values are a public, stable contract — records reference them,
/// so variants may be added but never renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    Modern,
    Classic,
    Minimal,
    Professional,
    Executive,
    Clean,
    Elegant,
    Corporate,
    Technical,
    Developer,
    Creative,
    Artistic,
    Innovative,
    Portfolio,
    Academic,
    Scholar,
}

impl TemplateId {
    pub const ALL: [TemplateId; 16] = [
        TemplateId::Modern,
        TemplateId::Classic,
        TemplateId::Minimal,
        TemplateId::Professional,
        TemplateId::Executive,
        TemplateId::Clean,
        TemplateId::Elegant,
        TemplateId::Corporate,
        TemplateId::Technical,
        TemplateId::Developer,
        TemplateId::Creative,
        TemplateId::Artistic,
        TemplateId::Innovative,
        TemplateId::Portfolio,
        TemplateId::Academic,
        TemplateId::Scholar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Minimal => "minimal",
            TemplateId::Professional => "professional",
            TemplateId::Executive => "executive",
            TemplateId::Clean => "clean",
            TemplateId::Elegant => "elegant",
            TemplateId::Corporate => "corporate",
            TemplateId::Technical => "technical",
            TemplateId::Developer => "developer",
            TemplateId::Creative => "creative",
            TemplateId::Artistic => "artistic",
            TemplateId::Innovative => "innovative",
            TemplateId::Portfolio => "portfolio",
            TemplateId::Academic => "academic",
            TemplateId::Scholar => "scholar",
        }
    }

    pub fn parse(value: &str) -> Option<TemplateId> {
        TemplateId::ALL.iter().copied().find(|t| t.as_str() == value)
    }

    /// The distinct layout this identifier renders with. Several identifiers
    /// intentionally alias one layout; the mapping is part of the contract.
    pub fn layout(&self) -> Layout {
        match self {
            TemplateId::Modern => Layout::Modern,
            TemplateId::Classic => Layout::Classic,
            TemplateId::Minimal => Layout::Minimal,
            TemplateId::Professional => Layout::Professional,
            TemplateId::Executive => Layout::Executive,
            TemplateId::Clean => Layout::Clean,
            TemplateId::Elegant => Layout::Elegant,
            TemplateId::Corporate => Layout::Corporate,
            TemplateId::Technical | TemplateId::Developer => Layout::Technical,
            TemplateId::Creative | TemplateId::Artistic | TemplateId::Innovative => {
                Layout::Creative
            }
            TemplateId::Portfolio => Layout::Portfolio,
            TemplateId::Academic | TemplateId::Scholar => Layout::Academic,
        }
    }
}

/// The structurally distinct layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    Modern,
    Classic,
    Minimal,
    Professional,
    Executive,
    Clean,
    Elegant,
    Corporate,
    Technical,
    Creative,
    Portfolio,
    Academic,
}

// ────────────────────────────────────────────────────────────────────────────
// Dispatch
// ────────────────────────────────────────────────────────────────────────────

/// Renders a CV with an explicit template identifier.
///
/// Unknown identifiers never fail: they fall back to the modern layout, the
/// same treatment legacy records with retired identifiers get.
pub fn render_cv(cv: &Cv, template_id: &str, messages: &Messages) -> Node {
    let layout = match TemplateId::parse(template_id) {
        Some(template) => template.layout(),
        None => {
            debug!(template_id, "unknown template id, rendering as modern");
            Layout::Modern
        }
    };

    match layout {
        Layout::Modern => layouts::modern::build(cv, messages),
        Layout::Classic => layouts::classic::build(cv, messages),
        Layout::Minimal => layouts::minimal::build(cv, messages),
        Layout::Professional => layouts::professional::build(cv, messages),
        Layout::Executive => layouts::executive::build(cv, messages),
        Layout::Clean => layouts::clean::build(cv, messages),
        Layout::Elegant => layouts::elegant::build(cv, messages),
        Layout::Corporate => layouts::corporate::build(cv, messages),
        Layout::Technical => layouts::technical::build(cv, messages),
        Layout::Creative => layouts::creative::build(cv, messages),
        Layout::Portfolio => layouts::portfolio::build(cv, messages),
        Layout::Academic => layouts::academic::build(cv, messages),
    }
}

/// Renders a CV with the template stored on the record itself.
pub fn render(cv: &Cv, messages: &Messages) -> Node {
    render_cv(cv, &cv.template_id, messages)
}

// ────────────────────────────────────────────────────────────────────────────
// Test fixtures
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::cv::{
        Certification, Cv, Education, Language, PersonalInfo, Project, Reference, WorkExperience,
    };

    /// A CV with every section populated.
    pub fn full_cv() -> Cv {
        Cv {
            title: "Kıdemli Mühendis CV".into(),
            personal_info: PersonalInfo {
                name: "Ayşe Yılmaz".into(),
                email: "ayse@example.com".into(),
                phone: "+90 555 111 2233".into(),
                location: "İstanbul".into(),
                website: "https://ayse.dev".into(),
                linkedin: "https://linkedin.com/in/ayseyilmaz".into(),
                profile_photo: "https://example.com/ayse.jpg".into(),
            },
            summary: "Dağıtık sistemler üzerine çalışan yazılım mühendisi.".into(),
            work_experience: vec![
                WorkExperience {
                    company: "Acme".into(),
                    position: "Engineer".into(),
                    start_date: "2020-01-01".into(),
                    end_date: String::new(),
                    description: "Built things".into(),
                    is_current: true,
                },
                WorkExperience {
                    company: "Globex".into(),
                    position: "Junior Engineer".into(),
                    start_date: "2017-06-01".into(),
                    end_date: "2019-12-01".into(),
                    description: "Maintained services".into(),
                    is_current: false,
                },
            ],
            education: vec![Education {
                institution: "Boğaziçi Üniversitesi".into(),
                degree: "Lisans".into(),
                field: "Bilgisayar Mühendisliği".into(),
                start_date: "2013-09-01".into(),
                end_date: "2017-06-01".into(),
                is_current: false,
            }],
            skills: vec!["Rust".into(), "PostgreSQL".into(), "Kubernetes".into()],
            languages: vec![Language {
                language: "İngilizce".into(),
                level: "C1".into(),
            }],
            certifications: vec![Certification {
                name: "CKA".into(),
                issuer: "CNCF".into(),
                date: "2023-05-01".into(),
                expiry_date: "2026-05-01".into(),
                credential_id: "CKA-1234".into(),
                credential_url: "https://example.com/cka".into(),
            }],
            projects: vec![Project {
                name: "cvforge".into(),
                description: "CV rendering toolkit".into(),
                technologies: vec!["Rust".into(), "Serde".into()],
                url: "https://github.com/example/cvforge".into(),
                start_date: "2022-01-01".into(),
                end_date: String::new(),
                is_current: true,
            }],
            references: vec![Reference {
                name: "Mehmet Demir".into(),
                position: "CTO".into(),
                company: "Acme".into(),
                email: "mehmet@example.com".into(),
                phone: "+90 555 444 5566".into(),
            }],
            template_id: "modern".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{Locale, Messages};
    use crate::normalize::normalize;

    fn messages() -> Messages {
        Messages::new(Locale::Tr)
    }

    #[test]
    fn test_template_id_round_trip() {
        for template in TemplateId::ALL {
            assert_eq!(TemplateId::parse(template.as_str()), Some(template));
        }
        assert_eq!(TemplateId::parse("unknown-id-123"), None);
    }

    #[test]
    fn test_all_templates_render_full_cv_section_complete() {
        let cv = fixtures::full_cv();
        let mut ids: Vec<&str> = TemplateId::ALL.iter().map(|t| t.as_str()).collect();
        ids.push("unknown-id-123");

        for id in ids {
            let html = to_html(&render_cv(&cv, id, &messages()));
            assert!(!html.is_empty(), "{id}: empty output");
            // One marker per section proves the section rendered.
            for marker in [
                "Ayşe Yılmaz",
                "Dağıtık sistemler",
                "Acme",
                "Boğaziçi Üniversitesi",
                "Rust",
                "İngilizce",
                "CKA",
                "cvforge",
                "Mehmet Demir",
            ] {
                assert!(html.contains(marker), "{id}: missing {marker}");
            }
        }
    }

    #[test]
    fn test_alias_identifiers_render_identically() {
        let cv = fixtures::full_cv();
        let msgs = messages();

        assert_eq!(
            render_cv(&cv, "developer", &msgs),
            render_cv(&cv, "technical", &msgs)
        );
        assert_eq!(
            render_cv(&cv, "artistic", &msgs),
            render_cv(&cv, "creative", &msgs)
        );
        assert_eq!(
            render_cv(&cv, "innovative", &msgs),
            render_cv(&cv, "creative", &msgs)
        );
        assert_eq!(
            render_cv(&cv, "scholar", &msgs),
            render_cv(&cv, "academic", &msgs)
        );
    }

    #[test]
    fn test_unknown_identifier_matches_modern() {
        let cv = fixtures::full_cv();
        let msgs = messages();
        assert_eq!(
            render_cv(&cv, "unknown-id-123", &msgs),
            render_cv(&cv, "modern", &msgs)
        );
    }

    #[test]
    fn test_placeholder_sections_omitted_in_every_template() {
        // Normalizing empty lists yields placeholder entries; no template may
        // render them as empty boxes.
        let cv = normalize(
            serde_json::from_str(
                r#"{
                    "personalInfo": {"name": "Ayşe Yılmaz"},
                    "workExperience": [],
                    "skills": [],
                    "education": []
                }"#,
            )
            .unwrap(),
        );
        assert_eq!(cv.work_experience.len(), 1);

        let msgs = messages();
        for template in TemplateId::ALL {
            let html = to_html(&render_cv(&cv, template.as_str(), &msgs));
            assert!(html.contains("Ayşe Yılmaz"), "{}", template.as_str());
            for label in ["İş Deneyimi", "Yetenekler", "Eğitim"] {
                assert!(
                    !html.contains(label),
                    "{}: placeholder section {label} leaked",
                    template.as_str()
                );
            }
        }
    }

    #[test]
    fn test_ongoing_entry_shows_ongoing_label_everywhere() {
        let mut cv = fixtures::full_cv();
        // Stale persisted end date must lose to the flag.
        cv.work_experience[0].end_date = "2023-06-01".into();
        cv.work_experience[0].is_current = true;

        let msgs = messages();
        for template in TemplateId::ALL {
            let html = to_html(&render_cv(&cv, template.as_str(), &msgs));
            assert!(
                html.contains("Devam ediyor"),
                "{}: ongoing label missing",
                template.as_str()
            );
            assert!(
                !html.contains("Haziran 2023"),
                "{}: stale end date rendered",
                template.as_str()
            );
        }
    }

    #[test]
    fn test_spec_example_scenario() {
        let cv = normalize(
            serde_json::from_str(
                r#"{
                    "personalInfo": {"name": "Ayşe Yılmaz"},
                    "workExperience": [{
                        "company": "Acme",
                        "position": "Engineer",
                        "startDate": "2020-01-01",
                        "endDate": "",
                        "isCurrent": true,
                        "description": "Built things"
                    }],
                    "skills": [],
                    "education": []
                }"#,
            )
            .unwrap(),
        );

        let html = to_html(&render_cv(&cv, "modern", &messages()));
        assert!(html.contains("Ayşe Yılmaz"));
        assert!(html.contains("Engineer"));
        assert!(html.contains("Acme"));
        assert!(html.contains("Ocak 2020 - Devam ediyor"));
        assert!(!html.contains("Yetenekler"));
        assert!(!html.contains("Eğitim"));
    }

    #[test]
    fn test_render_uses_record_template_id() {
        let mut cv = fixtures::full_cv();
        cv.template_id = "classic".into();
        let msgs = messages();
        assert_eq!(render(&cv, &msgs), render_cv(&cv, "classic", &msgs));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let cv = fixtures::full_cv();
        let msgs = messages();
        for template in TemplateId::ALL {
            let first = to_html(&render_cv(&cv, template.as_str(), &msgs));
            let second = to_html(&render_cv(&cv, template.as_str(), &msgs));
            assert_eq!(first, second, "{}", template.as_str());
        }
    }
}
