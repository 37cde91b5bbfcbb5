use crate::models::{AboutMe, Project};
use crate::scroll::{Direction, ScrollController, ScrollDelta};
use crate::validate::{self, FieldError, counter_label};
use crate::view::{self, AboutView, CardView, SpotlightView};

/// Acknowledgment shown after a valid submission.
pub const SUBMIT_SUCCESS: &str = "Form submitted successfully!";

/// Transient contact form state: the two inputs, their error slots and
/// whether the last submission succeeded.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub email: String,
    pub message: String,
    pub email_error: Option<FieldError>,
    pub message_error: Option<FieldError>,
    pub submitted: bool,
}

impl FormState {
    /// Live counter text, recomputed from the raw message on every edit.
    pub fn counter(&self) -> String {
        counter_label(self.message.chars().count())
    }

    /// The counter gets the error visual state above the limit. Typing
    /// is never blocked.
    pub fn counter_over_limit(&self) -> bool {
        self.message.chars().count() > validate::MESSAGE_LIMIT
    }

    /// Run both field rule lists. The fields validate independently, so
    /// both error slots can populate in one attempt; within one field
    /// only the first failing rule is recorded.
    pub fn submit(&mut self) -> bool {
        self.email_error = validate::validate_email(&self.email).err();
        self.message_error = validate::validate_message(&self.message).err();

        let valid = self.email_error.is_none() && self.message_error.is_none();
        if valid {
            self.email.clear();
            self.message.clear();
            self.submitted = true;
        } else {
            self.submitted = false;
        }
        valid
    }
}

/// Everything that happens on the page after startup.
#[derive(Debug, Clone)]
pub enum PageEvent {
    AboutMeLoaded(AboutMe),
    ProjectsLoaded(Vec<Project>),
    CardClicked(usize),
    ScrollRequested(Direction),
    EmailEdited(String),
    MessageEdited(String),
    SubmitRequested,
}

/// Owns all mutable page state; renderers read it through the pure
/// view functions.
#[derive(Debug)]
pub struct PageState {
    about_me: Option<AboutMe>,
    projects: Vec<Project>,
    spotlight: Option<usize>,
    pub form: FormState,
    pub scroll: ScrollController,
}

impl PageState {
    pub fn new(scroll: ScrollController) -> Self {
        Self {
            about_me: None,
            projects: Vec::new(),
            spotlight: None,
            form: FormState::default(),
            scroll,
        }
    }

    /// Apply one event. Returns the scroll offset the shell must
    /// perform, for scroll requests; every other event is absorbed.
    pub fn apply(&mut self, event: PageEvent) -> Option<ScrollDelta> {
        match event {
            PageEvent::AboutMeLoaded(about_me) => {
                self.about_me = Some(about_me);
            }
            PageEvent::ProjectsLoaded(projects) => {
                self.projects = projects;
                self.spotlight = Some(0);
            }
            PageEvent::CardClicked(index) => {
                // Cards only exist for loaded projects, but an index is
                // recorded even when stale; rendering falls back.
                self.spotlight = Some(index);
            }
            PageEvent::ScrollRequested(direction) => {
                return Some(self.scroll.delta(direction));
            }
            PageEvent::EmailEdited(value) => {
                self.form.email = value;
                self.form.submitted = false;
            }
            PageEvent::MessageEdited(value) => {
                self.form.message = value;
                self.form.submitted = false;
            }
            PageEvent::SubmitRequested => {
                self.form.submit();
            }
        }
        None
    }

    pub fn spotlight_index(&self) -> Option<usize> {
        self.spotlight
    }

    /// About section view, once the biography has loaded.
    pub fn about_view(&self) -> Option<AboutView> {
        self.about_me.as_ref().map(view::about_section)
    }

    /// One card per loaded project, in input order.
    pub fn card_views(&self) -> Vec<CardView> {
        view::project_cards(&self.projects)
    }

    /// Spotlight view for the current selection; `None` before the
    /// projects have loaded.
    pub fn spotlight_view(&self) -> Option<SpotlightView> {
        self.spotlight
            .map(|index| view::spotlight(&self.projects, index))
    }
}
