//! Controller layer: widget intents and how they reach the console state.

pub mod events;
pub mod orchestration;

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
