//! Professional layout: sidebar (photo, contact, skills, languages,
//! certifications) beside a main column (summary, experience, education,
//! projects, references).

use crate::locale::Messages;
use crate::models::cv::Cv;
use crate::render::helpers::{
    date_range, long_date, show_certifications, show_education, show_languages, show_projects,
    show_references, show_skills, show_summary, show_work_experience,
};
use crate::render::tree::{el, Element, Node};

pub fn build(cv: &Cv, messages: &Messages) -> Node {
    el("div")
        .class("cv cv-professional")
        .child(sidebar(cv, messages))
        .child(main_column(cv, messages))
        .into()
}

fn sidebar(cv: &Cv, messages: &Messages) -> Node {
    let info = &cv.personal_info;
    let mut aside = el("aside").class("professional-sidebar");

    if !info.profile_photo.is_empty() {
        aside = aside.child(el("img").class("professional-photo").attr("src", &info.profile_photo));
    }

    let mut contact = el("ul").class("professional-contact");
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
                el("ul").class("professional-list").children(
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
                el("ul").class("professional-list").children(cv.languages.iter().map(|lang| {
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

    if show_certifications(cv) {
        aside = aside.child(
            side_block(messages.lookup("cv.sections.certifications")).child(
                el("ul").class("professional-list").children(cv.certifications.iter().map(|cert| {
                    let mut item = el("li").child(el("strong").text(&cert.name));
                    if !cert.issuer.is_empty() {
                        item = item.child(el("span").text(format!(" — {}", cert.issuer)));
                    }
                    if !cert.date.is_empty() {
                        item = item.child(
                            el("span")
                                .class("professional-cert-date")
                                .text(long_date(&cert.date, messages.locale())),
                        );
                    }
                    item.into()
                })),
            ),
        );
    }

    aside.into()
}

fn side_block(title: &str) -> Element {
    el("div")
        .class("professional-side-block")
        .child(el("h2").text(title))
}

fn main_column(cv: &Cv, messages: &Messages) -> Node {
    let mut head = el("header")
        .class("professional-header")
        .child(el("h1").text(&cv.personal_info.name));
    if !cv.title.is_empty() {
        head = head.child(el("p").class("professional-title").text(&cv.title));
    }

    el("div")
        .class("professional-main")
        .child(head)
        .maybe(summary(cv, messages))
        .maybe(work_experience(cv, messages))
        .maybe(education(cv, messages))
        .maybe(projects(cv, messages))
        .maybe(references(cv, messages))
        .into()
}

fn section(title: &str) -> Element {
    el("section")
        .class("professional-section")
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
                .class("professional-entry")
                .child(el("h3").text(&exp.position))
                .child(el("p").class("professional-entry-org").text(&exp.company))
                .child(el("span").class("professional-entry-dates").text(date_range(
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
            el("article")
                .class("professional-entry")
                .child(el("h3").text(&edu.institution))
                .maybe((!edu.degree.is_empty()).then(|| el("p").text(&edu.degree).into()))
                .maybe(
                    (!edu.field.is_empty())
                        .then(|| el("p").class("professional-field").text(&edu.field).into()),
                )
                .child(el("span").class("professional-entry-dates").text(date_range(
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

fn projects(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_projects(cv).then(|| {
        let entries = cv.projects.iter().map(|project| {
            el("article")
                .class("professional-entry")
                .child(el("h3").text(&project.name))
                .maybe(
                    (!project.description.is_empty())
                        .then(|| el("p").text(&project.description).into()),
                )
                .maybe((!project.url.is_empty()).then(|| {
                    el("a").attr("href", &project.url).text(&project.url).into()
                }))
                .maybe((!project.start_date.is_empty()).then(|| {
                    el("span")
                        .class("professional-entry-dates")
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

fn references(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_references(cv).then(|| {
        let entries = cv.references.iter().map(|reference| {
            el("article")
                .class("professional-entry")
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
    fn test_skills_live_in_the_sidebar() {
        let html = to_html(&build(&full_cv(), &Messages::new(Locale::Tr)));

        let sidebar_end = html.find("professional-main").unwrap();
        let skills = html.find("Yetenekler").unwrap();
        let certifications = html.find("Sertifikalar").unwrap();
        assert!(skills < sidebar_end);
        assert!(certifications < sidebar_end);

        let experience = html.find("İş Deneyimi").unwrap();
        assert!(experience > sidebar_end);
    }

    #[test]
    fn test_photo_only_when_present() {
        let mut cv = full_cv();
        cv.personal_info.profile_photo.clear();
        let html = to_html(&build(&cv, &Messages::new(Locale::Tr)));
        assert!(!html.contains("professional-photo"));
    }
}
