//! Minimal layout: bare header, slim single column, inline skill and
//! language lists. No photo, no decoration.

use crate::locale::Messages;
use crate::models::cv::Cv;
use crate::render::helpers::{
    date_range, long_date, show_certifications, show_education, show_languages, show_projects,
    show_references, show_skills, show_summary, show_work_experience,
};
use crate::render::tree::{el, Element, Node};

pub fn build(cv: &Cv, messages: &Messages) -> Node {
    el("div")
        .class("cv cv-minimal")
        .child(header(cv))
        .maybe(summary(cv))
        .maybe(work_experience(cv, messages))
        .maybe(education(cv, messages))
        .maybe(inline_list(messages, "cv.sections.skills", skills_line(cv)))
        .maybe(inline_list(messages, "cv.sections.languages", languages_line(cv)))
        .maybe(certifications(cv, messages))
        .maybe(projects(cv, messages))
        .maybe(references(cv, messages))
        .into()
}

fn header(cv: &Cv) -> Node {
    let info = &cv.personal_info;
    let mut head = el("header")
        .class("minimal-header")
        .child(el("h1").text(&info.name));

    let mut line = Vec::new();
    for value in [&info.email, &info.phone, &info.location] {
        if !value.is_empty() {
            line.push(value.as_str());
        }
    }
    if !line.is_empty() {
        head = head.child(el("p").class("minimal-contact").text(line.join(" · ")));
    }
    head.into()
}

fn section(title: &str) -> Element {
    el("section")
        .class("minimal-section")
        .child(el("h2").text(title))
}

fn summary(cv: &Cv) -> Option<Node> {
    // The minimal layout runs the summary as an unlabelled lede.
    show_summary(cv).then(|| el("p").class("minimal-lede").text(&cv.summary).into())
}

fn work_experience(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_work_experience(cv).then(|| {
        let entries = cv.work_experience.iter().map(|exp| {
            el("div")
                .class("minimal-entry")
                .child(el("p").class("minimal-entry-line").text(format!(
                    "{}, {} — {}",
                    exp.position,
                    exp.company,
                    date_range(&exp.start_date, &exp.end_date, exp.is_current, messages.locale())
                )))
                .maybe(
                    (!exp.description.is_empty())
                        .then(|| el("p").class("minimal-entry-desc").text(&exp.description).into()),
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
            let mut line = edu.institution.clone();
            if !edu.degree.is_empty() {
                line = format!("{}, {}", line, edu.degree);
            }
            if !edu.field.is_empty() {
                line = format!("{} ({})", line, edu.field);
            }
            el("p")
                .class("minimal-entry-line")
                .text(format!(
                    "{} — {}",
                    line,
                    date_range(&edu.start_date, &edu.end_date, edu.is_current, messages.locale())
                ))
                .into()
        });

        section(messages.lookup("cv.sections.education"))
            .children(entries)
            .into()
    })
}

fn skills_line(cv: &Cv) -> Option<String> {
    show_skills(cv).then(|| {
        cv.skills
            .iter()
            .filter(|skill| !skill.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    })
}

fn languages_line(cv: &Cv) -> Option<String> {
    show_languages(cv).then(|| {
        cv.languages
            .iter()
            .map(|lang| {
                if lang.level.is_empty() {
                    lang.language.clone()
                } else {
                    format!("{} ({})", lang.language, lang.level)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    })
}

fn inline_list(messages: &Messages, key: &str, line: Option<String>) -> Option<Node> {
    line.map(|line| section(messages.lookup(key)).child(el("p").text(line)).into())
}

fn certifications(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_certifications(cv).then(|| {
        let entries = cv.certifications.iter().map(|cert| {
            let mut line = format!("{}, {}", cert.name, cert.issuer);
            if !cert.date.is_empty() {
                line = format!("{} — {}", line, long_date(&cert.date, messages.locale()));
            }
            el("p").class("minimal-entry-line").text(line).into()
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
                .class("minimal-entry")
                .child(el("p").class("minimal-entry-line").text(&project.name))
                .maybe(
                    (!project.description.is_empty())
                        .then(|| el("p").class("minimal-entry-desc").text(&project.description).into()),
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
            el("p")
                .class("minimal-entry-line")
                .text(format!(
                    "{} ({}, {}) — {}",
                    reference.name, reference.position, reference.company, reference.email
                ))
                .into()
        });

        section(messages.lookup("cv.sections.references"))
            .children(entries)
            .into()
    })
}
