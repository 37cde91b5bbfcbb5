use serde::{Deserialize, Serialize};

/// Placeholder shown when the biography text is missing.
pub const BIO_FALLBACK: &str = "Bio not available.";
/// Placeholder image used when no headshot is provided.
pub const HEADSHOT_FALLBACK: &str = "./images/headshot_placeholder.webp";
/// Title shown for a project without a name.
pub const TITLE_FALLBACK: &str = "Untitled Project";
/// Background used for cards without a card image.
pub const CARD_BG_FALLBACK: &str = "./images/card_placeholder_bg.webp";
/// Background used for the spotlight without a spotlight image.
pub const SPOTLIGHT_BG_FALLBACK: &str = "./images/spotlight_placeholder_bg.webp";

/// Biography record, one per page load. Every field is optional; the
/// accessors substitute the documented fallbacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AboutMe {
    #[serde(rename = "aboutMe", skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headshot: Option<String>,
}

impl AboutMe {
    pub fn bio_text(&self) -> &str {
        self.about_me.as_deref().unwrap_or(BIO_FALLBACK)
    }

    pub fn headshot_src(&self) -> &str {
        self.headshot.as_deref().unwrap_or(HEADSHOT_FALLBACK)
    }
}

/// One entry of the project list. Display order is insertion order;
/// identity is `project_id` or the positional index when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotlight_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Project {
    pub fn title(&self) -> &str {
        self.project_name.as_deref().unwrap_or(TITLE_FALLBACK)
    }

    pub fn short_text(&self) -> &str {
        self.short_description.as_deref().unwrap_or("")
    }

    pub fn long_text(&self) -> &str {
        self.long_description.as_deref().unwrap_or("")
    }

    pub fn card_background(&self) -> &str {
        self.card_image.as_deref().unwrap_or(CARD_BG_FALLBACK)
    }

    pub fn spotlight_background(&self) -> &str {
        self.spotlight_image.as_deref().unwrap_or(SPOTLIGHT_BG_FALLBACK)
    }

    /// Element identity: the declared id, or `project-{index}` by position.
    pub fn element_id(&self, index: usize) -> String {
        match &self.project_id {
            Some(id) => id.clone(),
            None => format!("project-{index}"),
        }
    }
}
