//! Corporate layout: full-width banner header over a two-column section
//! grid. Narrative sections fill the left column, list sections the right.

use crate::locale::Messages;
use crate::models::cv::Cv;
use crate::render::helpers::{
    date_range, long_date, show_certifications, show_education, show_languages, show_projects,
    show_references, show_skills, show_summary, show_work_experience,
};
use crate::render::tree::{el, Element, Node};

pub fn build(cv: &Cv, messages: &Messages) -> Node {
    el("div")
        .class("cv cv-corporate")
        .child(banner(cv))
        .child(
            el("div")
                .class("corporate-grid")
                .child(
                    el("div")
                        .class("corporate-col corporate-col-main")
                        .maybe(summary(cv, messages))
                        .maybe(work_experience(cv, messages))
                        .maybe(education(cv, messages)),
                )
                .child(
                    el("div")
                        .class("corporate-col corporate-col-side")
                        .maybe(skills(cv, messages))
                        .maybe(languages(cv, messages))
                        .maybe(certifications(cv, messages))
                        .maybe(projects(cv, messages))
                        .maybe(references(cv, messages)),
                ),
        )
        .into()
}

fn banner(cv: &Cv) -> Node {
    let info = &cv.personal_info;
    let mut head = el("header")
        .class("corporate-banner")
        .child(el("h1").text(&info.name));
    if !cv.title.is_empty() {
        head = head.child(el("p").class("corporate-title").text(&cv.title));
    }

    let mut contact = el("div").class("corporate-contact");
    for value in [&info.email, &info.phone, &info.location] {
        if !value.is_empty() {
            contact = contact.child(el("span").text(value));
        }
    }
    if !info.website.is_empty() {
        contact = contact.child(el("a").attr("href", &info.website).text(&info.website));
    }
    if !info.linkedin.is_empty() {
        contact = contact.child(el("a").attr("href", &info.linkedin).text("LinkedIn"));
    }
    head.child(contact).into()
}

fn section(title: &str) -> Element {
    el("section")
        .class("corporate-section")
        .child(el("h2").text(title))
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
            el("article")
                .class("corporate-entry")
                .child(el("h3").text(&exp.position))
                .child(el("p").class("corporate-entry-org").text(&exp.company))
                .child(el("span").class("corporate-entry-dates").text(date_range(
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
            let degree = if edu.field.is_empty() {
                edu.degree.clone()
            } else if edu.degree.is_empty() {
                edu.field.clone()
            } else {
                format!("{}, {}", edu.degree, edu.field)
            };

            el("article")
                .class("corporate-entry")
                .child(el("h3").text(&edu.institution))
                .maybe((!degree.is_empty()).then(|| el("p").text(degree).into()))
                .child(el("span").class("corporate-entry-dates").text(date_range(
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
        section(messages.lookup("cv.sections.skills"))
            .child(el("ul").class("corporate-list").children(
                cv.skills
                    .iter()
                    .filter(|skill| !skill.is_empty())
                    .map(|skill| el("li").text(skill).into()),
            ))
            .into()
    })
}

fn languages(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_languages(cv).then(|| {
        section(messages.lookup("cv.sections.languages"))
            .child(el("ul").class("corporate-list").children(cv.languages.iter().map(|lang| {
                let label = if lang.level.is_empty() {
                    lang.language.clone()
                } else {
                    format!("{} — {}", lang.language, lang.level)
                };
                el("li").text(label).into()
            })))
            .into()
    })
}

fn certifications(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_certifications(cv).then(|| {
        let entries = cv.certifications.iter().map(|cert| {
            let mut item = el("li").child(el("strong").text(&cert.name));
            if !cert.issuer.is_empty() {
                item = item.child(el("span").text(format!(" — {}", cert.issuer)));
            }
            if !cert.date.is_empty() {
                item = item.child(
                    el("span")
                        .class("corporate-entry-dates")
                        .text(long_date(&cert.date, messages.locale())),
                );
            }
            item.into()
        });

        section(messages.lookup("cv.sections.certifications"))
            .child(el("ul").class("corporate-list").children(entries))
            .into()
    })
}

fn projects(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_projects(cv).then(|| {
        let entries = cv.projects.iter().map(|project| {
            el("article")
                .class("corporate-entry")
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

fn references(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_references(cv).then(|| {
        let entries = cv.references.iter().map(|reference| {
            el("article")
                .class("corporate-entry")
                .child(el("h3").text(&reference.name))
                .child(el("p").text(format!("{}, {}", reference.position, reference.company)))
                .child(el("span").text(&reference.email))
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
    fn test_sections_split_across_two_columns() {
        let html = to_html(&build(&full_cv(), &Messages::new(Locale::Tr)));
        let side_start = html.find("corporate-col-side").unwrap();
        assert!(html.find("İş Deneyimi").unwrap() < side_start);
        assert!(html.find("Eğitim").unwrap() < side_start);
        assert!(html.find("Yetenekler").unwrap() > side_start);
        assert!(html.find("Referanslar").unwrap() > side_start);
    }
}
