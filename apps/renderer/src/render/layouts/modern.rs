//! Modern layout: accent header band over a single column, standard section
//! order. Unknown template identifiers also render through this builder.

use crate::locale::Messages;
use crate::models::cv::Cv;
use crate::render::helpers::{
    date_range, long_date, show_certifications, show_education, show_languages, show_projects,
    show_references, show_skills, show_summary, show_work_experience,
};
use crate::render::tree::{el, Node};

pub fn build(cv: &Cv, messages: &Messages) -> Node {
    el("div")
        .class("cv cv-modern")
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
    let mut head = el("header").class("modern-header");

    if !info.profile_photo.is_empty() {
        head = head.child(el("img").class("modern-photo").attr("src", &info.profile_photo));
    }

    let mut identity = el("div")
        .class("modern-identity")
        .child(el("h1").text(&info.name));
    if !cv.title.is_empty() {
        identity = identity.child(el("p").class("modern-title").text(&cv.title));
    }

    let mut contact = el("div").class("modern-contact");
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

    head.child(identity.child(contact)).into()
}

fn section(title: &str) -> crate::render::tree::Element {
    el("section")
        .class("modern-section")
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
                .class("modern-entry")
                .child(
                    el("div")
                        .class("modern-entry-head")
                        .child(el("h3").text(&exp.position))
                        .child(el("span").class("modern-entry-org").text(&exp.company)),
                )
                .child(el("span").class("modern-entry-dates").text(date_range(
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
                .class("modern-entry")
                .child(el("h3").text(&edu.institution))
                .maybe((!degree.is_empty()).then(|| el("p").class("modern-degree").text(degree).into()))
                .child(el("span").class("modern-entry-dates").text(date_range(
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
            .child(el("ul").class("modern-skills").children(
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
        let entries = cv.languages.iter().map(|lang| {
            el("li")
                .child(el("span").class("modern-lang-name").text(&lang.language))
                .maybe(
                    (!lang.level.is_empty())
                        .then(|| el("span").class("modern-lang-level").text(&lang.level).into()),
                )
                .into()
        });

        section(messages.lookup("cv.sections.languages"))
            .child(el("ul").class("modern-languages").children(entries))
            .into()
    })
}

fn certifications(cv: &Cv, messages: &Messages) -> Option<Node> {
    show_certifications(cv).then(|| {
        let entries = cv.certifications.iter().map(|cert| {
            let mut entry = el("article")
                .class("modern-entry")
                .child(el("h3").text(&cert.name))
                .child(el("span").class("modern-entry-org").text(&cert.issuer));
            if !cert.date.is_empty() {
                entry = entry.child(
                    el("span")
                        .class("modern-entry-dates")
                        .text(long_date(&cert.date, messages.locale())),
                );
            }
            if !cert.expiry_date.is_empty() {
                entry = entry.child(el("span").class("modern-cert-expiry").text(format!(
                    "{}: {}",
                    messages.lookup("cv.fields.expires"),
                    long_date(&cert.expiry_date, messages.locale())
                )));
            }
            if !cert.credential_id.is_empty() {
                entry = entry.child(el("span").class("modern-cert-id").text(format!(
                    "{}: {}",
                    messages.lookup("cv.fields.credentialId"),
                    cert.credential_id
                )));
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
                .class("modern-entry")
                .child(name)
                .maybe((!project.start_date.is_empty()).then(|| {
                    el("span")
                        .class("modern-entry-dates")
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
                .maybe((!project.technologies.is_empty()).then(|| {
                    el("ul")
                        .class("modern-tech")
                        .children(project.technologies.iter().map(|t| el("li").text(t).into()))
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
                .class("modern-entry")
                .child(el("h3").text(&reference.name))
                .child(
                    el("p")
                        .class("modern-ref-role")
                        .text(format!("{}, {}", reference.position, reference.company)),
                )
                .child(el("span").text(&reference.email))
                .child(el("span").text(&reference.phone))
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
    fn test_photo_and_links_render_only_when_present() {
        let messages = Messages::new(Locale::Tr);

        let full = to_html(&build(&full_cv(), &messages));
        assert!(full.contains("modern-photo"));
        assert!(full.contains(r#"href="https://ayse.dev""#));

        let mut bare = full_cv();
        bare.personal_info.profile_photo.clear();
        bare.personal_info.website.clear();
        bare.personal_info.linkedin.clear();
        let html = to_html(&build(&bare, &messages));
        assert!(!html.contains("modern-photo"));
        assert!(!html.contains("https://ayse.dev"));
        assert!(!html.contains("LinkedIn"));
    }

    #[test]
    fn test_education_degree_line_merges_field_of_study() {
        let messages = Messages::new(Locale::Tr);
        let cv = full_cv();
        let html = to_html(&build(&cv, &messages));
        assert!(html.contains("Lisans, Bilgisayar Mühendisliği"));

        let mut no_field = full_cv();
        no_field.education[0].field.clear();
        let html = to_html(&build(&no_field, &messages));
        assert!(html.contains("Lisans"));
        assert!(!html.contains("Lisans,"));
    }
}
