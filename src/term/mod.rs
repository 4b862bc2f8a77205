//! Terminal presentation - crossterm renderer for the app screens

mod renderer;
mod view;

pub use renderer::TerminalRenderer;
