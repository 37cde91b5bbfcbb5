mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from folio for tests
pub use folio::{
    AboutMe, Axis, ContentSource, Direction, FieldError, Node, PageEvent, PageState, Project,
    ScrollController,
};
