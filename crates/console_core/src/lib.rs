//! Selection-state model for the Operati console: which panel is shown, which
//! regime dataset feeds the Macroscope, whether the demo login has happened,
//! and the dashboard's derived figures.

pub mod aggregate;
mod console;
pub mod format;
pub mod routing;
pub mod session;
pub mod state;

pub use aggregate::FirmOverview;
pub use console::Console;
pub use routing::{Panel, View, ViewSelection};
pub use session::{LoginForm, Session, DEMO_NOTICE};
pub use state::{reduce, Action, ConsoleState};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
