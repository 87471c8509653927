//! Creative layout, shared by the `creative`, `artistic` and `innovative`
//! identifiers. Colored sidebar with photo, contact, skills and languages;
//! the main column leads with projects.

use crate::locale::Messages;
use crate::models::cv::Cv;
use crate::render::helpers::{
    date_range, long_date, show_certifications, show_education, show_languages, show_projects,
    show_references, show_skills, show_summary, show_work_experience,
};
use crate::render::tree::{el, Element, Node};

pub fn build(cv: &Cv, messages: &Messages) -> Node {
    el("div")
        .class("cv cv-creative")
        .child(sidebar(cv, messages))
        .child(main_column(cv, messages))
        .into()
}

fn sidebar(cv: &Cv, messages: &Messages) -> Node {
    let info = &cv.personal_info;
    let mut aside = el("aside").class("creative-sidebar");

    if !info.profile_photo.is_empty() {
        aside = aside.child(el("img").class("creative-photo").attr("src", &info.profile_photo));
    }
    aside = aside.child(el("h1").text(&info.name));
    if !cv.title.is_empty() {
        aside = aside.child(el("p").class("creative-title").text(&cv.title));
    }

    let mut contact = el("ul").class("creative-contact");
    for value in [&info.email, &info.phone, &info.location] {
        if !value.is_empty() {
            contact = contact.child(el("li").text(value));
        }
    }
    if !info.website.is_empty() {
        contact = contact.child(el("li").child(el("a").attr("href", &info.website).text(&info.website)));
    }
    if !info.linkedin.is_empty() {
        contact = contact.child(el("li").child(el("a").attr("href", &info.linkedin).text("LinkedIn")));
    }
    aside = aside.child(contact);

    if show_skills(cv) {
        aside = aside.child(
            side_block(messages.lookup("cv.sections.skills")).child(
                el("ul").class("creative-list").children(
                    cv.skills
                        .iter()
                        .filter(|skill| !skill.is_empty())
                        .map(|skill| el("li").text(skill).into()),
                ),
            ),
        );
    }

    if show_languages(cv) {
        aside = aside.child(
            side_block(messages.lookup("cv.sections.languages")).child(
                el("ul").class("creative-list").children(cv.languages.iter().map(|lang| {
                    let label = if lang.level.is_empty() {
                        lang.language.clone()
                    } else {
                        format!("{} — {}", lang.language, lang.level)
                    };
                    el("li").text(label).into()
                })),
            ),
        );
    }

    aside.into()
}

fn side_block(title: &str) -> Element {
    el("div")
        .class("creative-side-block")
        .child(el("h2").text(title))
}

fn main_column(cv: &Cv, messages: &Messages) -> Node {
    el("div")
        .class("creative-main")
        .maybe(summary(cv, messages))
        .maybe(projects(cv, messages))
        .maybe(work_experience(cv, messages))
        .maybe(education(cv, messages))
        .maybe(certifications(cv, messages))
        .maybe(references(cv, messages))
        .into()
}

fn section(title: &str) -> Element {
    el("section")
        .class("creative-section")
        .child(el("h2").text(title))
}

fn summary(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_summary(cv).then(|| {
        section(messages.lookup("cv.sections.summary"))
            .child(el("p").class("creative-lede").text(&cv.summary))
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
                .class("creative-card")
                .child(name)
                .maybe(
                    (!project.description.is_empty())
                        .then(|| el("p").text(&project.description).into()),
                )
                .maybe((!project.technologies.is_empty()).then(|| {
                    el("p")
                        .class("creative-card-tech")
                        .text(
                            project
                                .technologies
                                .iter()
                                .filter(|tech| !tech.is_empty())
                                .map(String::as_str)
                                .collect::<Vec<_>>()
                                .join(" · "),
                        )
                        .into()
                }))
                .maybe((!project.start_date.is_empty()).then(|| {
                    el("span")
                        .class("creative-dates")
                        .text(date_range(
                            &project.start_date,
                            &project.end_date,
                            project.is_current,
                            messages.locale(),
                        ))
                        .into()
                }))
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
                .class("creative-card")
                .child(el("h3").text(&exp.position))
                .child(el("p").class("creative-card-org").text(&exp.company))
                .child(el("span").class("creative-dates").text(date_range(
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
                .class("creative-card")
                .child(el("h3").text(&edu.institution))
                .maybe((!degree.is_empty()).then(|| el("p").text(degree).into()))
                .child(el("span").class("creative-dates").text(date_range(
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
            el("p").class("creative-cert").text(line).into()
        });

        section(messages.lookup("cv.sections.certifications"))
            .children(entries)
            .into()
    })
}

fn references(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_references(cv).then(|| {
        let entries = cv.references.iter().map(|reference| {
            el("article")
                .class("creative-card")
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
    fn test_projects_lead_the_main_column() {
        let html = to_html(&build(&full_cv(), &Messages::new(Locale::Tr)));
        let main_start = html.find("creative-main").unwrap();
        let projects = html.find("Projeler").unwrap();
        let experience = html.find("İş Deneyimi").unwrap();
        assert!(projects > main_start);
        assert!(projects < experience);
    }

    #[test]
    fn test_skills_stay_in_the_sidebar() {
        let html = to_html(&build(&full_cv(), &Messages::new(Locale::Tr)));
        let main_start = html.find("creative-main").unwrap();
        assert!(html.find("Yetenekler").unwrap() < main_start);
    }
}
