//! Executive layout: summary leads, references are elevated to directly
//! follow experience. Single column with a heavyweight header.

use crate::locale::Messages;
use crate::models::cv::Cv;
use crate::render::helpers::{
    date_range, long_date, show_certifications, show_education, show_languages, show_projects,
    show_references, show_skills, show_summary, show_work_experience,
};
use crate::render::tree::{el, Element, Node};

pub fn build(cv: &Cv, messages: &Messages) -> Node {
    el("div")
        .class("cv cv-executive")
        .child(header(cv))
        .maybe(summary(cv, messages))
        .maybe(work_experience(cv, messages))
        .maybe(references(cv, messages))
        .maybe(education(cv, messages))
        .maybe(certifications(cv, messages))
        .maybe(skills(cv, messages))
        .maybe(languages(cv, messages))
        .maybe(projects(cv, messages))
        .into()
}

fn header(cv: &Cv) -> Node {
    let info = &cv.personal_info;
    let mut head = el("header")
        .class("executive-header")
        .child(el("h1").text(&info.name));
    if !cv.title.is_empty() {
        head = head.child(el("p").class("executive-title").text(&cv.title));
    }

    let mut contact = el("div").class("executive-contact");
    for value in [&info.email, &info.phone, &info.location, &info.linkedin] {
        if !value.is_empty() {
            contact = contact.child(el("span").text(value));
        }
    }
    head.child(contact).into()
}

fn section(title: &str) -> Element {
    el("section")
        .class("executive-section")
        .child(el("h2").text(title))
}

fn summary(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_summary(cv).then(|| {
        section(messages.lookup("cv.sections.summary"))
            .child(el("p").class("executive-lede").text(&cv.summary))
            .into()
    })
}

fn work_experience(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_work_experience(cv).then(|| {
        let entries = cv.work_experience.iter().map(|exp| {
            el("article")
                .class("executive-entry")
                .child(
                    el("div")
                        .class("executive-entry-head")
                        .child(el("h3").text(&exp.company))
                        .child(el("span").class("executive-entry-dates").text(date_range(
                            &exp.start_date,
                            &exp.end_date,
                            exp.is_current,
                            messages.locale(),
                        ))),
                )
                .child(el("p").class("executive-entry-role").text(&exp.position))
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

fn references(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_references(cv).then(|| {
        let entries = cv.references.iter().map(|reference| {
            el("article")
                .class("executive-entry")
                .child(el("h3").text(&reference.name))
                .child(el("p").text(format!("{}, {}", reference.position, reference.company)))
                .child(
                    el("span")
                        .class("executive-ref-contact")
                        .text(format!("{} | {}", reference.email, reference.phone)),
                )
                .into()
        });

        section(messages.lookup("cv.sections.references"))
            .children(entries)
            .into()
    })
}

fn education(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_education(cv).then(|| {
        let entries = cv.education.iter().map(|edu| {
            let mut entry = el("article")
                .class("executive-entry")
                .child(el("h3").text(&edu.institution));
            if !edu.degree.is_empty() {
                entry = entry.child(el("p").text(&edu.degree));
            }
            if !edu.field.is_empty() {
                entry = entry.child(el("p").class("executive-field").text(&edu.field));
            }
            entry
                .child(el("span").class("executive-entry-dates").text(date_range(
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

fn certifications(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_certifications(cv).then(|| {
        let entries = cv.certifications.iter().map(|cert| {
            let mut line = format!("{}, {}", cert.name, cert.issuer);
            if !cert.date.is_empty() {
                line = format!("{} ({})", line, long_date(&cert.date, messages.locale()));
            }
            el("p").class("executive-cert").text(line).into()
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
            .join(" · ");
        section(messages.lookup("cv.sections.skills"))
            .child(el("p").text(line))
            .into()
    })
}

fn languages(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_languages(cv).then(|| {
        let line = cv
            .languages
            .iter()
            .map(|lang| {
                if lang.level.is_empty() {
                    lang.language.clone()
                } else {
                    format!("{} ({})", lang.language, lang.level)
                }
            })
            .collect::<Vec<_>>()
            .join(" · ");
        section(messages.lookup("cv.sections.languages"))
            .child(el("p").text(line))
            .into()
    })
}

fn projects(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_projects(cv).then(|| {
        let entries = cv.projects.iter().map(|project| {
            el("article")
                .class("executive-entry")
                .child(el("h3").text(&project.name))
                .maybe(
                    (!project.description.is_empty())
                        .then(|| el("p").text(&project.description).into()),
                )
                .into()
        });

        section(messages.lookup("cv.sections.projects"))
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
    fn test_references_follow_experience_before_education() {
        let html = to_html(&build(&full_cv(), &Messages::new(Locale::Tr)));
        let experience = html.find("İş Deneyimi").unwrap();
        let references = html.find("Referanslar").unwrap();
        let education = html.find("Eğitim").unwrap();
        assert!(experience < references);
        assert!(references < education);
    }
}
