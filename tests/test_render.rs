//! Tests for the declarative render functions.
//!
//! Tests cover:
//! - About section fallbacks for missing bio text and headshot
//! - Card list: one card per project, input order, identity, click payload
//! - Spotlight content, fallbacks for out-of-range indexes, link handling

mod common;

use common::*;
use folio::models::{
    BIO_FALLBACK, CARD_BG_FALLBACK, HEADSHOT_FALLBACK, SPOTLIGHT_BG_FALLBACK, TITLE_FALLBACK,
};
use folio::view::{about_section, project_cards, spotlight};

#[test]
fn test_about_section_with_full_record() {
    let view = about_section(&sample_about_me());
    assert_eq!(
        view.nodes,
        vec![
            Node::Paragraph {
                text: "I build small tools.".to_string()
            },
            Node::Image {
                src: "./images/headshot.webp".to_string(),
                alt: "Headshot".to_string()
            },
        ]
    );
}

#[test]
fn test_about_section_fallbacks() {
    let view = about_section(&AboutMe::default());
    assert_eq!(
        view.nodes,
        vec![
            Node::Paragraph {
                text: BIO_FALLBACK.to_string()
            },
            Node::Image {
                src: HEADSHOT_FALLBACK.to_string(),
                alt: "Headshot".to_string()
            },
        ]
    );
}

#[test]
fn test_cards_preserve_input_order() {
    let projects = sample_projects(4);
    let cards = project_cards(&projects);

    assert_eq!(cards.len(), 4);
    for (i, card) in cards.iter().enumerate() {
        assert_eq!(card.index, i, "Click payload must select project {i}");
        assert_eq!(card.element_id, format!("proj_{i}"));
        assert_eq!(card.title, format!("project{i}"));
        assert_eq!(card.short_description, format!("project{i} in short"));
    }
}

#[test]
fn test_empty_sequence_renders_no_cards() {
    assert!(project_cards(&[]).is_empty());
}

#[test]
fn test_card_fallbacks() {
    let cards = project_cards(&[Project::default()]);

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].element_id, "project-0");
    assert_eq!(cards[0].background, CARD_BG_FALLBACK);
    assert_eq!(cards[0].title, TITLE_FALLBACK);
    assert_eq!(cards[0].short_description, "");
}

#[test]
fn test_spotlight_full_project() {
    let projects = sample_projects(2);
    let view = spotlight(&projects, 1);

    assert_eq!(view.background, "./images/project1_spotlight.webp");
    assert_eq!(
        view.nodes,
        vec![
            Node::Heading {
                text: "project1".to_string()
            },
            Node::Paragraph {
                text: "project1 at length".to_string()
            },
            Node::Link {
                href: "https://example.com/project1".to_string(),
                text: "Click here to see more...".to_string(),
                new_tab: true
            },
        ]
    );
}

#[test]
fn test_spotlight_out_of_range_renders_fallbacks() {
    let projects = sample_projects(2);
    let view = spotlight(&projects, 7);

    assert_eq!(view.background, SPOTLIGHT_BG_FALLBACK);
    assert_eq!(
        view.nodes,
        vec![
            Node::Heading {
                text: TITLE_FALLBACK.to_string()
            },
            Node::Paragraph {
                text: String::new()
            },
        ],
        "Out-of-range spotlight must render fallbacks and omit the link"
    );
}

#[test]
fn test_spotlight_without_url_omits_link() {
    let mut project = make_project(0, "quiet");
    project.url = None;
    let view = spotlight(&[project], 0);

    let links = view
        .nodes
        .iter()
        .filter(|node| matches!(node, Node::Link { .. }))
        .count();
    assert_eq!(links, 0);
}

#[test]
fn test_spotlight_with_url_renders_exactly_one_new_tab_link() {
    let projects = sample_projects(1);
    let view = spotlight(&projects, 0);

    let links: Vec<_> = view
        .nodes
        .iter()
        .filter_map(|node| match node {
            Node::Link { href, new_tab, .. } => Some((href.clone(), *new_tab)),
            _ => None,
        })
        .collect();
    assert_eq!(links, vec![("https://example.com/project0".to_string(), true)]);
}
