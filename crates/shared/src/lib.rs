//! Domain records and the static sample book shared by the console crates.

pub mod catalog;
pub mod domain;
pub mod error;

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
