//! Elegant layout: centered header with a photo medallion, ornamental
//! divider above every section heading.

use crate::locale::Messages;
use crate::models::cv::Cv;
use crate::render::helpers::{
    date_range, long_date, show_certifications, show_education, show_languages, show_projects,
    show_references, show_skills, show_summary, show_work_experience,
};
use crate::render::tree::{el, Element, Node};

pub fn build(cv: &Cv, messages: &Messages) -> Node {
    el("div")
        .class("cv cv-elegant")
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
    let mut head = el("header").class("elegant-header");

    if !info.profile_photo.is_empty() {
        head = head.child(el("img").class("elegant-medallion").attr("src", &info.profile_photo));
    }
    head = head.child(el("h1").text(&info.name));
    if !cv.title.is_empty() {
        head = head.child(el("p").class("elegant-title").text(&cv.title));
    }

    let mut line = Vec::new();
    for value in [&info.email, &info.phone, &info.location] {
        if !value.is_empty() {
            line.push(value.as_str());
        }
    }
    if !line.is_empty() {
        head = head.child(el("p").class("elegant-contact").text(line.join(" · ")));
    }

    if !info.website.is_empty() {
        head = head.child(el("a").attr("href", &info.website).text(&info.website));
    }
    head.into()
}

/// Section heading crowned with the ornamental divider.
fn section(title: &str) -> Element {
    el("section")
        .class("elegant-section")
        .child(el("div").class("elegant-divider"))
        .child(el("h2").text(title))
}

fn summary(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_summary(cv).then(|| {
        section(messages.lookup("cv.sections.summary"))
            .child(el("p").class("elegant-prose").text(&cv.summary))
            .into()
    })
}

fn work_experience(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_work_experience(cv).then(|| {
        let entries = cv.work_experience.iter().map(|exp| {
            el("article")
                .class("elegant-entry")
                .child(el("h3").text(&exp.position))
                .child(el("p").class("elegant-entry-org").text(&exp.company))
                .child(el("p").class("elegant-entry-dates").text(date_range(
                    &exp.start_date,
                    &exp.end_date,
                    exp.is_current,
                    messages.locale(),
                )))
                .maybe(
                    (!exp.description.is_empty())
                        .then(|| el("p").class("elegant-prose").text(&exp.description).into()),
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
            let degree = if edu.field.is_empty() {
                edu.degree.clone()
            } else if edu.degree.is_empty() {
                edu.field.clone()
            } else {
                format!("{}, {}", edu.degree, edu.field)
            };

            el("article")
                .class("elegant-entry")
                .child(el("h3").text(&edu.institution))
                .maybe((!degree.is_empty()).then(|| el("p").text(degree).into()))
                .child(el("p").class("elegant-entry-dates").text(date_range(
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
            .join(" · ");
        section(messages.lookup("cv.sections.skills"))
            .child(el("p").class("elegant-centered").text(line))
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
            .child(el("p").class("elegant-centered").text(line))
            .into()
    })
}

fn certifications(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_certifications(cv).then(|| {
        let entries = cv.certifications.iter().map(|cert| {
            let mut entry = el("article")
                .class("elegant-entry")
                .child(el("h3").text(&cert.name))
                .child(el("p").class("elegant-entry-org").text(&cert.issuer));
            if !cert.date.is_empty() {
                entry = entry.child(
                    el("p")
                        .class("elegant-entry-dates")
                        .text(long_date(&cert.date, messages.locale())),
                );
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
            el("article")
                .class("elegant-entry")
                .child(el("h3").text(&project.name))
                .maybe(
                    (!project.description.is_empty())
                        .then(|| el("p").class("elegant-prose").text(&project.description).into()),
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
            el("article")
                .class("elegant-entry")
                .child(el("h3").text(&reference.name))
                .child(el("p").text(format!("{}, {}", reference.position, reference.company)))
                .child(el("p").class("elegant-contact").text(format!(
                    "{} · {}",
                    reference.email, reference.phone
                )))
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
    fn test_medallion_only_when_photo_present() {
        let messages = Messages::new(Locale::Tr);
        let with = to_html(&build(&full_cv(), &messages));
        assert!(with.contains("elegant-medallion"));

        let mut cv = full_cv();
        cv.personal_info.profile_photo.clear();
        let without = to_html(&build(&cv, &messages));
        assert!(!without.contains("elegant-medallion"));
    }

    #[test]
    fn test_divider_crowns_each_visible_section() {
        let html = to_html(&build(&full_cv(), &Messages::new(Locale::Tr)));
        assert_eq!(html.matches("elegant-divider").count(), 8);
    }
}
