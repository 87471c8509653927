//! Classic layout: centered header, one contact line, ruled dividers under
//! each section heading.

use crate::locale::Messages;
use crate::models::cv::{Cv, PersonalInfo};
use crate::render::helpers::{
    date_range, long_date, show_certifications, show_education, show_languages, show_projects,
    show_references, show_skills, show_summary, show_work_experience,
};
use crate::render::tree::{el, Element, Node};

pub fn build(cv: &Cv, messages: &Messages) -> Node {
    el("div")
        .class("cv cv-classic")
        .child(header(cv))
        .maybe(summary(cv, messages))
        .maybe(work_experience(cv, messages))
        .maybe(education(cv, messages))
        .maybe(skills(cv, messages))
        .maybe(languages(cv, messages))
        .maybe(certifications(cv, messages))
        .maybe(projects(cv, messages))
        .maybe(references(cv, messages))
        .into()
}

/// Non-empty contact fields joined into a single " | " separated line.
fn contact_line(info: &PersonalInfo) -> String {
    [
        &info.email,
        &info.phone,
        &info.location,
        &info.website,
        &info.linkedin,
    ]
    .into_iter()
    .filter(|value| !value.is_empty())
    .map(String::as_str)
    .collect::<Vec<_>>()
    .join(" | ")
}

fn header(cv: &Cv) -> Node {
    let mut head = el("header")
        .class("classic-header")
        .child(el("h1").text(&cv.personal_info.name));
    if !cv.title.is_empty() {
        head = head.child(el("p").class("classic-title").text(&cv.title));
    }
    let contact = contact_line(&cv.personal_info);
    if !contact.is_empty() {
        head = head.child(el("p").class("classic-contact").text(contact));
    }
    head.into()
}

fn section(title: &str) -> Element {
    el("section")
        .class("classic-section")
        .child(el("h2").text(title))
        .child(el("hr").class("classic-rule"))
}

fn summary(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_summary(cv).then(|| {
        section(messages.lookup("cv.sections.summary"))
            .child(el("p").text(&cv.summary))
            .into()
    })
}

fn work_experience(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_work_experience(cv).then(|| {
        let entries = cv.work_experience.iter().map(|exp| {
            el("div")
                .class("classic-entry")
                .child(
                    el("p")
                        .class("classic-entry-title")
                        .child(el("strong").text(&exp.position))
                        .child(el("span").text(format!(", {}", exp.company))),
                )
                .child(el("p").class("classic-entry-dates").text(date_range(
                    &exp.start_date,
                    &exp.end_date,
                    exp.is_current,
                    messages.locale(),
                )))
                .maybe(
                    (!exp.description.is_empty())
                        .then(|| el("p").text(&exp.description).into()),
                )
                .into()
        });

        section(messages.lookup("cv.sections.workExperience"))
            .children(entries)
            .into()
    })
}

fn education(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_education(cv).then(|| {
        let entries = cv.education.iter().map(|edu| {
            let mut entry = el("div")
                .class("classic-entry")
                .child(el("p").class("classic-entry-title").child(el("strong").text(&edu.institution)));
            if !edu.degree.is_empty() {
                entry = entry.child(el("p").text(&edu.degree));
            }
            if !edu.field.is_empty() {
                entry = entry.child(el("p").class("classic-field").text(&edu.field));
            }
            entry
                .child(el("p").class("classic-entry-dates").text(date_range(
                    &edu.start_date,
                    &edu.end_date,
                    edu.is_current,
                    messages.locale(),
                )))
                .into()
        });

        section(messages.lookup("cv.sections.education"))
            .children(entries)
            .into()
    })
}

fn skills(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_skills(cv).then(|| {
        let line = cv
            .skills
            .iter()
            .filter(|skill| !skill.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        section(messages.lookup("cv.sections.skills"))
            .child(el("p").text(line))
            .into()
    })
}

fn languages(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_languages(cv).then(|| {
        let entries = cv.languages.iter().map(|lang| {
            let label = if lang.level.is_empty() {
                lang.language.clone()
            } else {
                format!("{} ({})", lang.language, lang.level)
            };
            el("p").class("classic-language").text(label).into()
        });

        section(messages.lookup("cv.sections.languages"))
            .children(entries)
            .into()
    })
}

fn certifications(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_certifications(cv).then(|| {
        let entries = cv.certifications.iter().map(|cert| {
            let mut entry = el("div")
                .class("classic-entry")
                .child(
                    el("p")
                        .class("classic-entry-title")
                        .child(el("strong").text(&cert.name))
                        .child(el("span").text(format!(", {}", cert.issuer))),
                );
            if !cert.date.is_empty() {
                entry = entry.child(
                    el("p")
                        .class("classic-entry-dates")
                        .text(long_date(&cert.date, messages.locale())),
                );
            }
            if !cert.credential_id.is_empty() {
                entry = entry.child(el("p").text(format!(
                    "{}: {}",
                    messages.lookup("cv.fields.credentialId"),
                    cert.credential_id
                )));
            }
            entry.into()
        });

        section(messages.lookup("cv.sections.certifications"))
            .children(entries)
            .into()
    })
}

fn projects(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_projects(cv).then(|| {
        let entries = cv.projects.iter().map(|project| {
            el("div")
                .class("classic-entry")
                .child(el("p").class("classic-entry-title").child(el("strong").text(&project.name)))
                .maybe(
                    (!project.description.is_empty())
                        .then(|| el("p").text(&project.description).into()),
                )
                .maybe((!project.url.is_empty()).then(|| {
                    el("p")
                        .child(el("a").attr("href", &project.url).text(&project.url))
                        .into()
                }))
                .into()
        });

        section(messages.lookup("cv.sections.projects"))
            .children(entries)
            .into()
    })
}

fn references(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_references(cv).then(|| {
        let entries = cv.references.iter().map(|reference| {
            el("div")
                .class("classic-entry")
                .child(
                    el("p")
                        .class("classic-entry-title")
                        .child(el("strong").text(&reference.name))
                        .child(el("span").text(format!(
                            ", {} - {}",
                            reference.position, reference.company
                        ))),
                )
                .child(el("p").text(format!("{} | {}", reference.email, reference.phone)))
                .into()
        });

        section(messages.lookup("cv.sections.references"))
            .children(entries)
            .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::render::fixtures::full_cv;
    use crate::render::tree::to_html;

    #[test]
    fn test_contact_line_joins_only_filled_fields() {
        let mut info = full_cv().personal_info;
        assert_eq!(
            contact_line(&info),
            "ayse@example.com | +90 555 111 2233 | İstanbul | https://ayse.dev | https://linkedin.com/in/ayseyilmaz"
        );

        info.phone.clear();
        info.website.clear();
        info.linkedin.clear();
        assert_eq!(contact_line(&info), "ayse@example.com | İstanbul");
    }

    #[test]
    fn test_ruled_heading_per_visible_section() {
        let html = to_html(&build(&full_cv(), &Messages::new(Locale::Tr)));
        // Eight sections populated, one rule under each heading.
        assert_eq!(html.matches("classic-rule").count(), 8);
    }
}
