//! Desktop shell: login card, sidebar, header and the four content panels.

pub mod app;
pub mod charts;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::ConsoleApp;

#[cfg(test)]
#[path = "tests/ui_tests.rs"]
mod tests;
