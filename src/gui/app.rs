use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{Id, operation};
use iced::{Element, Size, Task, Theme};

use crate::content::ContentSource;
use crate::models::{AboutMe, Project};
use crate::scroll::{Direction, ScrollController};
use crate::state::{PageEvent, PageState};

use super::widgets;

/// Initial window size; the scroll axis is derived from its width once
/// at startup, like the original page's media query.
pub const WINDOW_SIZE: Size = Size::new(1280.0, 860.0);

#[derive(Debug, Clone)]
pub enum Message {
    AboutMeFetched(Option<AboutMe>),
    ProjectsFetched(Option<Vec<Project>>),
    CardClicked(usize),
    Scroll(Direction),
    EmailEdited(String),
    MessageEdited(String),
    SubmitPressed,
    LinkClicked(String),
}

pub struct PortfolioApp {
    state: PageState,
    project_list: Id,
}

impl PortfolioApp {
    pub fn new(source: ContentSource) -> (Self, Task<Message>) {
        let app = Self {
            state: PageState::new(ScrollController::from_viewport_width(WINDOW_SIZE.width)),
            project_list: Id::unique(),
        };

        // Both resources load in parallel; each failure only logs and
        // leaves its section unrendered.
        let about_source = source.clone();
        let fetch_about = Task::perform(
            async move {
                match about_source.fetch_about_me().await {
                    Ok(about_me) => Some(about_me),
                    Err(e) => {
                        tracing::error!("Error fetching About Me data: {:#}", e);
                        None
                    }
                }
            },
            Message::AboutMeFetched,
        );
        let fetch_projects = Task::perform(
            async move {
                match source.fetch_projects().await {
                    Ok(projects) => Some(projects),
                    Err(e) => {
                        tracing::error!("Error fetching Projects data: {:#}", e);
                        None
                    }
                }
            },
            Message::ProjectsFetched,
        );

        (app, Task::batch([fetch_about, fetch_projects]))
    }

    pub fn title(&self) -> String {
        "Folio - Personal Portfolio".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let event = match message {
            Message::AboutMeFetched(Some(about_me)) => PageEvent::AboutMeLoaded(about_me),
            Message::ProjectsFetched(Some(projects)) => PageEvent::ProjectsLoaded(projects),
            Message::AboutMeFetched(None) | Message::ProjectsFetched(None) => {
                return Task::none();
            }
            Message::CardClicked(index) => PageEvent::CardClicked(index),
            Message::Scroll(direction) => PageEvent::ScrollRequested(direction),
            Message::EmailEdited(value) => PageEvent::EmailEdited(value),
            Message::MessageEdited(value) => PageEvent::MessageEdited(value),
            Message::SubmitPressed => PageEvent::SubmitRequested,
            Message::LinkClicked(url) => {
                tracing::info!("External link requested: {}", url);
                return Task::none();
            }
        };

        match self.state.apply(event) {
            Some(delta) => operation::scroll_by(
                self.project_list.clone(),
                AbsoluteOffset {
                    x: delta.x,
                    y: delta.y,
                },
            ),
            None => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        widgets::page(&self.state, self.project_list.clone())
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Launch the portfolio window against the given content source.
pub fn run(source: ContentSource) -> iced::Result {
    iced::application(
        move || PortfolioApp::new(source.clone()),
        PortfolioApp::update,
        PortfolioApp::view,
    )
    .title(PortfolioApp::title)
    .theme(PortfolioApp::theme)
    .window_size(WINDOW_SIZE)
    .run()
}
