use iced::widget::{Id, button, column, container, image, row, scrollable, text, text_input};
use iced::{Alignment::Center, Element, Length};

use crate::scroll::{Axis, Direction};
use crate::state::{FormState, PageState, SUBMIT_SUCCESS};
use crate::validate::FieldError;
use crate::view::{CardView, Node, SpotlightView};

use super::Message;

/// Whole-page layout: about section, project section, contact form.
pub fn page(state: &PageState, list_id: Id) -> Element<'static, Message> {
    let mut sections = column![].spacing(40).padding(20);

    if let Some(about) = state.about_view() {
        sections = sections.push(section("About Me", nodes(&about.nodes)));
    }

    sections = sections.push(section(
        "My Projects",
        project_section(state, list_id),
    ));
    sections = sections.push(section("Get in Touch", contact_form(&state.form)));

    scrollable(container(sections).center_x(Length::Fill)).into()
}

fn section(title: &str, content: Element<'static, Message>) -> Element<'static, Message> {
    column![text(title.to_string()).size(32), content]
        .spacing(20)
        .into()
}

/// Card list between the two arrow controls, next to the spotlight.
fn project_section(state: &PageState, list_id: Id) -> Element<'static, Message> {
    let cards = state.card_views();
    let axis = state.scroll.axis();

    let list: Element<'static, Message> = match axis {
        Axis::Vertical => {
            let mut list = column![].spacing(10);
            for card_view in &cards {
                list = list.push(card(card_view));
            }
            scrollable(list)
                .id(list_id)
                .height(Length::Fixed(520.0))
                .into()
        }
        Axis::Horizontal => {
            let mut list = row![].spacing(10);
            for card_view in &cards {
                list = list.push(card(card_view));
            }
            scrollable(list)
                .direction(scrollable::Direction::Horizontal(
                    scrollable::Scrollbar::default(),
                ))
                .id(list_id)
                .width(Length::Fill)
                .into()
        }
    };

    let arrows = column![
        button(text("^")).on_press(Message::Scroll(Direction::Previous)),
        button(text("v")).on_press(Message::Scroll(Direction::Next)),
    ]
    .spacing(10);

    let mut content = row![arrows, list].spacing(20);
    if let Some(spotlight) = state.spotlight_view() {
        content = content.push(spotlight_panel(&spotlight));
    }

    content.into()
}

fn card(card: &CardView) -> Element<'static, Message> {
    let content = column![
        image(image::Handle::from_path(&card.background))
            .width(Length::Fixed(220.0))
            .height(Length::Fixed(110.0)),
        text(card.title.clone()).size(18),
        text(card.short_description.clone()).size(14),
    ]
    .spacing(5);

    button(content)
        .on_press(Message::CardClicked(card.index))
        .width(Length::Fixed(240.0))
        .into()
}

fn spotlight_panel(spotlight: &SpotlightView) -> Element<'static, Message> {
    let content = column![image(image::Handle::from_path(&spotlight.background))
        .width(Length::Fixed(640.0))
        .height(Length::Fixed(280.0))]
    .push(nodes(&spotlight.nodes))
    .spacing(15);

    container(content).width(Length::Fill).into()
}

/// Map a rendered node list onto widgets, in order.
fn nodes(nodes: &[Node]) -> Element<'static, Message> {
    let mut content = column![].spacing(10);
    for node in nodes {
        content = content.push(match node {
            Node::Heading { text: heading } => {
                Element::from(text(heading.clone()).size(24))
            }
            Node::Paragraph { text: body } => Element::from(text(body.clone())),
            Node::Image { src, .. } => Element::from(
                image(image::Handle::from_path(src)).width(Length::Fixed(200.0)),
            ),
            Node::Link { href, text: label, .. } => Element::from(
                button(text(label.clone())).on_press(Message::LinkClicked(href.clone())),
            ),
        });
    }
    content.into()
}

fn contact_form(form: &FormState) -> Element<'static, Message> {
    let email = column![
        text_input("Email", &form.email).on_input(Message::EmailEdited),
        field_error(form.email_error.map(FieldError::message)),
    ]
    .spacing(5);

    let counter = if form.counter_over_limit() {
        text(form.counter()).style(text::danger)
    } else {
        text(form.counter())
    };
    let message = column![
        text_input("Message", &form.message).on_input(Message::MessageEdited),
        counter,
        field_error(form.message_error.map(FieldError::message_field_text)),
    ]
    .spacing(5);

    let mut content = column![
        email,
        message,
        button(text("Send")).on_press(Message::SubmitPressed),
    ]
    .spacing(15)
    .width(Length::Fixed(480.0))
    .align_x(Center);

    if form.submitted {
        content = content.push(text(SUBMIT_SUCCESS));
    }

    content.into()
}

fn field_error(message: Option<&'static str>) -> Element<'static, Message> {
    match message {
        Some(message) => text(message).style(text::danger).into(),
        None => text("").into(),
    }
}
