//! Technical layout, shared by the `technical` and `developer` identifiers.
//! Skills lead as tag pills and projects come before work experience, each
//! project carrying its technology tags.

use crate::locale::Messages;
use crate::models::cv::Cv;
use crate::render::helpers::{
    date_range, long_date, show_certifications, show_education, show_languages, show_projects,
    show_references, show_skills, show_summary, show_work_experience,
};
use crate::render::tree::{el, Element, Node};

pub fn build(cv: &Cv, messages: &Messages) -> Node {
    el("div")
        .class("cv cv-technical")
        .child(header(cv))
        .maybe(summary(cv, messages))
        .maybe(skills(cv, messages))
        .maybe(projects(cv, messages))
        .maybe(work_experience(cv, messages))
        .maybe(education(cv, messages))
        .maybe(certifications(cv, messages))
        .maybe(languages(cv, messages))
        .maybe(references(cv, messages))
        .into()
}

fn header(cv: &Cv) -> Node {
    let info = &cv.personal_info;
    let mut head = el("header")
        .class("technical-header")
        .child(el("h1").text(&info.name));
    if !cv.title.is_empty() {
        head = head.child(el("p").class("technical-title").text(&cv.title));
    }

    let mut contact = el("div").class("technical-contact");
    for value in [&info.email, &info.phone, &info.location] {
        if !value.is_empty() {
            contact = contact.child(el("span").text(value));
        }
    }
    if !info.website.is_empty() {
        contact = contact.child(el("a").attr("href", &info.website).text(&info.website));
    }
    if !info.linkedin.is_empty() {
        contact = contact.child(el("a").attr("href", &info.linkedin).text(&info.linkedin));
    }
    head.child(contact).into()
}

fn section(title: &str) -> Element {
    el("section")
        .class("technical-section")
        .child(el("h2").text(title))
}

fn tag_pills(class: &'static str, tags: &[String]) -> Node {
    el("ul")
        .class(class)
        .children(
            tags.iter()
                .filter(|tag| !tag.is_empty())
                .map(|tag| el("li").class("technical-pill").text(tag).into()),
        )
        .into()
}

fn summary(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_summary(cv).then(|| {
        section(messages.lookup("cv.sections.summary"))
            .child(el("p").text(&cv.summary))
            .into()
    })
}

fn skills(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_skills(cv).then(|| {
        section(messages.lookup("cv.sections.skills"))
            .child(tag_pills("technical-skills", &cv.skills))
            .into()
    })
}

fn projects(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_projects(cv).then(|| {
        let entries = cv.projects.iter().map(|project| {
            let name: Node = if project.url.is_empty() {
                el("h3").text(&project.name).into()
            } else {
                el("h3")
                    .child(el("a").attr("href", &project.url).text(&project.name))
                    .into()
            };

            el("article")
                .class("technical-entry")
                .child(name)
                .maybe((!project.start_date.is_empty()).then(|| {
                    el("span")
                        .class("technical-entry-dates")
                        .text(date_range(
                            &project.start_date,
                            &project.end_date,
                            project.is_current,
                            messages.locale(),
                        ))
                        .into()
                }))
                .maybe(
                    (!project.description.is_empty())
                        .then(|| el("p").text(&project.description).into()),
                )
                .maybe(
                    (!project.technologies.is_empty())
                        .then(|| tag_pills("technical-tags", &project.technologies)),
                )
                .into()
        });

        section(messages.lookup("cv.sections.projects"))
            .children(entries)
            .into()
    })
}

fn work_experience(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_work_experience(cv).then(|| {
        let entries = cv.work_experience.iter().map(|exp| {
            el("article")
                .class("technical-entry")
                .child(
                    el("div")
                        .class("technical-entry-head")
                        .child(el("h3").text(&exp.position))
                        .child(el("span").class("technical-entry-org").text(&exp.company))
                        .child(el("span").class("technical-entry-dates").text(date_range(
                            &exp.start_date,
                            &exp.end_date,
                            exp.is_current,
                            messages.locale(),
                        ))),
                )
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
            let mut entry = el("article")
                .class("technical-entry")
                .child(el("h3").text(&edu.institution));
            if !edu.degree.is_empty() {
                entry = entry.child(el("span").text(&edu.degree));
            }
            if !edu.field.is_empty() {
                entry = entry.child(el("span").class("technical-field").text(&edu.field));
            }
            entry
                .child(el("span").class("technical-entry-dates").text(date_range(
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
            let mut entry = el("article")
                .class("technical-entry")
                .child(el("h3").text(&cert.name))
                .child(el("span").class("technical-entry-org").text(&cert.issuer));
            if !cert.date.is_empty() {
                entry = entry.child(
                    el("span")
                        .class("technical-entry-dates")
                        .text(long_date(&cert.date, messages.locale())),
                );
            }
            if !cert.credential_id.is_empty() {
                entry = entry.child(el("code").text(&cert.credential_id));
            }
            if !cert.credential_url.is_empty() {
                entry = entry.child(
                    el("a")
                        .attr("href", &cert.credential_url)
                        .text(&cert.credential_url),
                );
            }
            entry.into()
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
    fn test_skills_and_projects_precede_experience() {
        let html = to_html(&build(&full_cv(), &Messages::new(Locale::Tr)));
        let skills = html.find("Yetenekler").unwrap();
        let projects = html.find("Projeler").unwrap();
        let experience = html.find("İş Deneyimi").unwrap();
        assert!(skills < projects);
        assert!(projects < experience);
    }

    #[test]
    fn test_project_technologies_render_as_pills() {
        let html = to_html(&build(&full_cv(), &Messages::new(Locale::Tr)));
        assert!(html.contains("technical-tags"));
        assert!(html.contains(r#"<li class="technical-pill">Serde</li>"#));
    }
}
