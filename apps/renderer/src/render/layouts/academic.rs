//! Academic layout, shared by the `academic` and `scholar` identifiers.
//! Formal single column with education before experience; the field of study
//! carries as much weight as the degree.

use crate::locale::Messages;
use crate::models::cv::Cv;
use crate::render::helpers::{
    date_range, long_date, show_certifications, show_education, show_languages, show_projects,
    show_references, show_skills, show_summary, show_work_experience,
};
use crate::render::tree::{el, Element, Node};

pub fn build(cv: &Cv, messages: &Messages) -> Node {
    el("div")
        .class("cv cv-academic")
        .child(header(cv))
        .maybe(summary(cv, messages))
        .maybe(education(cv, messages))
        .maybe(work_experience(cv, messages))
        .maybe(projects(cv, messages))
        .maybe(certifications(cv, messages))
        .maybe(skills(cv, messages))
        .maybe(languages(cv, messages))
        .maybe(references(cv, messages))
        .into()
}

fn header(cv: &Cv) -> Node {
    let info = &cv.personal_info;
    let mut head = el("header")
        .class("academic-header")
        .child(el("h1").text(&info.name));
    if !cv.title.is_empty() {
        head = head.child(el("p").class("academic-title").text(&cv.title));
    }

    let mut line = Vec::new();
    for value in [&info.email, &info.phone, &info.location, &info.website] {
        if !value.is_empty() {
            line.push(value.as_str());
        }
    }
    if !line.is_empty() {
        head = head.child(el("p").class("academic-contact").text(line.join(" | ")));
    }
    head.into()
}

fn section(title: &str) -> Element {
    el("section")
        .class("academic-section")
        .child(el("h2").text(title))
}

fn summary(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_summary(cv).then(|| {
        section(messages.lookup("cv.sections.summary"))
            .child(el("p").text(&cv.summary))
            .into()
    })
}

fn education(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_education(cv).then(|| {
        let entries = cv.education.iter().map(|edu| {
            let mut entry = el("article")
                .class("academic-entry")
                .child(el("h3").text(&edu.institution));
            if !edu.degree.is_empty() {
                entry = entry.child(el("p").class("academic-degree").text(&edu.degree));
            }
            if !edu.field.is_empty() {
                entry = entry.child(el("p").class("academic-field").text(&edu.field));
            }
            entry
                .child(el("span").class("academic-dates").text(date_range(
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

fn work_experience(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_work_experience(cv).then(|| {
        let entries = cv.work_experience.iter().map(|exp| {
            el("article")
                .class("academic-entry")
                .child(el("h3").text(&exp.position))
                .child(el("p").class("academic-entry-org").text(&exp.company))
                .child(el("span").class("academic-dates").text(date_range(
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

fn projects(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_projects(cv).then(|| {
        let entries = cv.projects.iter().map(|project| {
            el("article")
                .class("academic-entry")
                .child(el("h3").text(&project.name))
                .maybe(
                    (!project.description.is_empty())
                        .then(|| el("p").text(&project.description).into()),
                )
                .maybe((!project.url.is_empty()).then(|| {
                    el("a").attr("href", &project.url).text(&project.url).into()
                }))
                .into()
        });

        section(messages.lookup("cv.sections.projects"))
            .children(entries)
            .into()
    })
}

fn certifications(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_certifications(cv).then(|| {
        let entries = cv.certifications.iter().map(|cert| {
            let mut entry = el("article")
                .class("academic-entry")
                .child(el("h3").text(&cert.name))
                .child(el("p").class("academic-entry-org").text(&cert.issuer));
            if !cert.date.is_empty() {
                entry = entry.child(
                    el("span")
                        .class("academic-dates")
                        .text(long_date(&cert.date, messages.locale())),
                );
            }
            if !cert.expiry_date.is_empty() {
                entry = entry.child(el("span").text(format!(
                    "{}: {}",
                    messages.lookup("cv.fields.expires"),
                    long_date(&cert.expiry_date, messages.locale())
                )));
            }
            entry.into()
        });

        section(messages.lookup("cv.sections.certifications"))
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
            el("p").class("academic-language").text(label).into()
        });

        section(messages.lookup("cv.sections.languages"))
            .children(entries)
            .into()
    })
}

fn references(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_references(cv).then(|| {
        let entries = cv.references.iter().map(|reference| {
            el("article")
                .class("academic-entry")
                .child(el("h3").text(&reference.name))
                .child(el("p").text(format!("{}, {}", reference.position, reference.company)))
                .child(el("span").text(format!("{} | {}", reference.email, reference.phone)))
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
    fn test_education_precedes_experience() {
        let html = to_html(&build(&full_cv(), &Messages::new(Locale::Tr)));
        let education = html.find("Eğitim").unwrap();
        let experience = html.find("İş Deneyimi").unwrap();
        assert!(education < experience);
    }

    #[test]
    fn test_field_of_study_renders_on_its_own_line() {
        let html = to_html(&build(&full_cv(), &Messages::new(Locale::Tr)));
        assert!(html.contains(r#"<p class="academic-field">Bilgisayar Mühendisliği</p>"#));
    }
}
