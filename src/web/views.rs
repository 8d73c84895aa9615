use askama::Template;
use askama_web::WebTemplate;

use super::{Phase, Session};
use crate::catalog::{self, Category};
use crate::constants::GENERATION_FAILED_MESSAGE;

/// One selectable chip on the studio page.
pub(crate) struct OptionView {
    pub(crate) id: String,
    pub(crate) label: String,
    pub(crate) selected: bool,
}

/// One category section with its catalog.
pub(crate) struct CategorySection {
    pub(crate) title: String,
    pub(crate) field: String,
    pub(crate) options: Vec<OptionView>,
}

#[derive(Template, WebTemplate)]
#[template(path = "studio.html")]
pub(crate) struct StudioTemplate {
    pub(crate) sections: Vec<CategorySection>,
    pub(crate) light_intensity: u8,
    pub(crate) is_generating: bool,
    pub(crate) has_error: bool,
    pub(crate) error_message: String,
    pub(crate) has_image: bool,
}

/// Builds the studio page from the current session.
pub(crate) fn studio_page(session: &Session) -> StudioTemplate {
    let sections = Category::ALL
        .iter()
        .map(|category| CategorySection {
            title: category.title().to_string(),
            field: category.as_str().to_string(),
            options: catalog::options_for(*category)
                .iter()
                .map(|option| OptionView {
                    id: option.id.to_string(),
                    label: option.label.to_string(),
                    selected: session.config.selected(*category) == option.id,
                })
                .collect(),
        })
        .collect();

    StudioTemplate {
        sections,
        light_intensity: session.config.light_intensity,
        is_generating: session.phase == Phase::Generating,
        has_error: session.phase == Phase::Error,
        error_message: GENERATION_FAILED_MESSAGE.to_string(),
        has_image: session.image.is_some(),
    }
}
