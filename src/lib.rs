pub mod content;
pub mod models;
pub mod scroll;
pub mod state;
pub mod validate;
pub mod view;

pub use content::ContentSource;
pub use models::{AboutMe, Project};
pub use scroll::{Axis, Direction, ScrollController, ScrollDelta};
pub use state::{PageEvent, PageState};
pub use validate::{FieldError, counter_label, validate_email, validate_message};
pub use view::{AboutView, CardView, Node, SpotlightView};

#[cfg(feature = "gui")]
pub mod gui;
