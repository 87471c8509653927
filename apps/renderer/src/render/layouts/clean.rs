//! Clean layout: flat single column, comma-joined skills, no decoration.

use crate::locale::Messages;
use crate::models::cv::Cv;
use crate::render::helpers::{
    date_range, long_date, show_certifications, show_education, show_languages, show_projects,
    show_references, show_skills, show_summary, show_work_experience,
};
use crate::render::tree::{el, Element, Node};

pub fn build(cv: &Cv, messages: &Messages) -> Node {
    el("div")
        .class("cv cv-clean")
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

fn header(cv: &Cv) -> Node {
    let info = &cv.personal_info;
    let mut head = el("header").class("clean-header").child(el("h1").text(&info.name));

    let mut line = Vec::new();
    for value in [&info.email, &info.phone, &info.location, &info.website] {
        if !value.is_empty() {
            line.push(value.as_str());
        }
    }
    if !line.is_empty() {
        head = head.child(el("p").text(line.join("  ")));
    }
    head.into()
}

fn section(title: &str) -> Element {
    el("section").class("clean-section").child(el("h2").text(title))
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
                .class("clean-entry")
                .child(el("h3").text(format!("{} — {}", exp.position, exp.company)))
                .child(el("p").class("clean-dates").text(date_range(
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
            let mut title = edu.institution.clone();
            if !edu.degree.is_empty() {
                title = format!("{} — {}", title, edu.degree);
            }
            el("div")
                .class("clean-entry")
                .child(el("h3").text(title))
                .maybe((!edu.field.is_empty()).then(|| el("p").text(&edu.field).into()))
                .child(el("p").class("clean-dates").text(date_range(
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
            .join(", ");
        section(messages.lookup("cv.sections.languages"))
            .child(el("p").text(line))
            .into()
    })
}

fn certifications(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_certifications(cv).then(|| {
        let entries = cv.certifications.iter().map(|cert| {
            let mut line = format!("{} — {}", cert.name, cert.issuer);
            if !cert.date.is_empty() {
                line = format!("{}, {}", line, long_date(&cert.date, messages.locale()));
            }
            el("p").text(line).into()
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
                .class("clean-entry")
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

fn references(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_references(cv).then(|| {
        let entries = cv.references.iter().map(|reference| {
            el("p").text(format!(
                "{} — {}, {} ({})",
                reference.name, reference.position, reference.company, reference.email
            ))
            .into()
        });

        section(messages.lookup("cv.sections.references"))
            .children(entries)
            .into()
    })
}
