use axum::response::IntoResponse;
use folio_contact::{FormState, SubmissionStatus};

use crate::{config::SiteConfig, template::Template};

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        icon: "code",
        title: "Clean Code",
        description: "Writing maintainable, scalable code that stands the test of time.",
    },
    Highlight {
        icon: "rocket",
        title: "Performance",
        description: "Optimizing for speed and delivering lightning-fast user experiences.",
    },
    Highlight {
        icon: "users",
        title: "Collaboration",
        description: "Working closely with teams to bring ideas to life.",
    },
    Highlight {
        icon: "lightbulb",
        title: "Innovation",
        description: "Staying ahead with the latest technologies and best practices.",
    },
];

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub site: &'a SiteConfig,
    pub highlights: &'a [Highlight],
    pub form: FormState,
    pub status: SubmissionStatus,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(site: &'a SiteConfig, form: FormState, status: SubmissionStatus) -> Self {
        Self {
            site,
            highlights: &HIGHLIGHTS,
            form,
            status,
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate::new(
        &template.site,
        FormState::default(),
        SubmissionStatus::Idle,
    ))
}
