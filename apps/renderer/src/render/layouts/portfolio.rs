//! Portfolio layout: the project showcase opens the document, with outward
//! links front and center; experience and the remaining sections follow.

use crate::locale::Messages;
use crate::models::cv::Cv;
use crate::render::helpers::{
    date_range, long_date, show_certifications, show_education, show_languages, show_projects,
    show_references, show_skills, show_summary, show_work_experience,
};
use crate::render::tree::{el, Element, Node};

pub fn build(cv: &Cv, messages: &Messages) -> Node {
    el("div")
        .class("cv cv-portfolio")
        .child(header(cv))
        .maybe(summary(cv))
        .maybe(showcase(cv, messages))
        .maybe(work_experience(cv, messages))
        .maybe(skills(cv, messages))
        .maybe(education(cv, messages))
        .maybe(certifications(cv, messages))
        .maybe(languages(cv, messages))
        .maybe(references(cv, messages))
        .into()
}

fn header(cv: &Cv) -> Node {
    let info = &cv.personal_info;
    let mut head = el("header")
        .class("portfolio-header")
        .child(el("h1").text(&info.name));
    if !cv.title.is_empty() {
        head = head.child(el("p").class("portfolio-title").text(&cv.title));
    }

    let mut contact = el("div").class("portfolio-contact");
    for value in [&info.email, &info.location] {
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
        .class("portfolio-section")
        .child(el("h2").text(title))
}

fn summary(cv: &Cv) -> Option<Node> {
    show_summary(cv).then(|| el("p").class("portfolio-lede").text(&cv.summary).into())
}

fn showcase(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_projects(cv).then(|| {
        let cards = cv.projects.iter().map(|project| {
            let name: Node = if project.url.is_empty() {
                el("h3").text(&project.name).into()
            } else {
                el("h3")
                    .child(el("a").attr("href", &project.url).text(&project.name))
                    .into()
            };

            let mut card = el("article").class("portfolio-card").child(name);
            if !project.description.is_empty() {
                card = card.child(el("p").text(&project.description));
            }
            if !project.technologies.is_empty() {
                card = card.child(
                    el("ul").class("portfolio-card-tech").children(
                        project
                            .technologies
                            .iter()
                            .filter(|tech| !tech.is_empty())
                            .map(|tech| el("li").text(tech).into()),
                    ),
                );
            }
            if !project.start_date.is_empty() {
                card = card.child(el("span").class("portfolio-dates").text(date_range(
                    &project.start_date,
                    &project.end_date,
                    project.is_current,
                    messages.locale(),
                )));
            }
            if !project.url.is_empty() {
                card = card.child(
                    el("a")
                        .class("portfolio-card-link")
                        .attr("href", &project.url)
                        .text(&project.url),
                );
            }
            card.into()
        });

        section(messages.lookup("cv.sections.projects"))
            .child(el("div").class("portfolio-showcase").children(cards))
            .into()
    })
}

fn work_experience(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_work_experience(cv).then(|| {
        let entries = cv.work_experience.iter().map(|exp| {
            el("article")
                .class("portfolio-entry")
                .child(el("h3").text(&exp.position))
                .child(el("p").class("portfolio-entry-org").text(&exp.company))
                .child(el("span").class("portfolio-dates").text(date_range(
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

fn skills(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_skills(cv).then(|| {
        section(messages.lookup("cv.sections.skills"))
            .child(el("ul").class("portfolio-skills").children(
                cv.skills
                    .iter()
                    .filter(|skill| !skill.is_empty())
                    .map(|skill| el("li").text(skill).into()),
            ))
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
                .class("portfolio-entry")
                .child(el("h3").text(&edu.institution))
                .maybe((!degree.is_empty()).then(|| el("p").text(degree).into()))
                .child(el("span").class("portfolio-dates").text(date_range(
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::render::fixtures::full_cv;
    use crate::render::tree::to_html;

    #[test]
    fn test_showcase_opens_with_linked_projects() {
        let html = to_html(&build(&full_cv(), &Messages::new(Locale::Tr)));
        let projects = html.find("Projeler").unwrap();
        let experience = html.find("İş Deneyimi").unwrap();
        assert!(projects < experience);
        assert!(html.contains(r#"href="https://github.com/example/cvforge""#));
    }
}
