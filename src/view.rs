//! Declarative render functions: each takes current data and produces a
//! plain view tree, so every component can be tested without a live
//! display surface. The GUI layer maps these trees onto widgets.

use crate::models::{AboutMe, Project};

/// One node of a rendered section, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Heading { text: String },
    Paragraph { text: String },
    Image { src: String, alt: String },
    /// External link; `new_tab` mirrors `target="_blank"`.
    Link { href: String, text: String, new_tab: bool },
}

/// Rendered about section: bio paragraph plus headshot image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutView {
    pub nodes: Vec<Node>,
}

/// One clickable summary tile of the project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub element_id: String,
    /// Cover-sized, centered background image reference.
    pub background: String,
    pub title: String,
    pub short_description: String,
    /// Click payload: selects this project in the spotlight.
    pub index: usize,
}

/// The expanded detail view of the selected project. `nodes` fully
/// replaces any previous spotlight content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotlightView {
    /// Cover-sized, centered background image reference.
    pub background: String,
    pub nodes: Vec<Node>,
}

/// Render the about section from the biography record.
pub fn about_section(about: &AboutMe) -> AboutView {
    AboutView {
        nodes: vec![
            Node::Paragraph {
                text: about.bio_text().to_string(),
            },
            Node::Image {
                src: about.headshot_src().to_string(),
                alt: "Headshot".to_string(),
            },
        ],
    }
}

/// Render one card per project, in input order. An empty slice renders
/// no cards.
pub fn project_cards(projects: &[Project]) -> Vec<CardView> {
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| CardView {
            element_id: project.element_id(index),
            background: project.card_background().to_string(),
            title: project.title().to_string(),
            short_description: project.short_text().to_string(),
            index,
        })
        .collect()
}

/// Render the spotlight for the project at `index`. An out-of-range
/// index behaves as an empty record: fallback title, empty description,
/// placeholder background and no link.
pub fn spotlight(projects: &[Project], index: usize) -> SpotlightView {
    let empty = Project::default();
    let project = projects.get(index).unwrap_or(&empty);

    let mut nodes = vec![
        Node::Heading {
            text: project.title().to_string(),
        },
        Node::Paragraph {
            text: project.long_text().to_string(),
        },
    ];
    if let Some(url) = &project.url {
        nodes.push(Node::Link {
            href: url.clone(),
            text: "Click here to see more...".to_string(),
            new_tab: true,
        });
    }

    SpotlightView {
        background: project.spotlight_background().to_string(),
        nodes,
    }
}
