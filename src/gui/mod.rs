pub mod app;
pub mod widgets;

pub use app::{Message, PortfolioApp, run};
