//! Applies a frame's intents to the console state, in the order they were raised.

use console_core::Console;

use crate::controller::events::{Notice, UiIntent};

/// Returns whether anything visible changed.
pub fn apply_intents(
    console: &mut Console,
    notice: &mut Option<Notice>,
    intents: Vec<UiIntent>,
) -> bool {
    let mut changed = false;
    for intent in intents {
        tracing::debug!(intent = intent.name(), "applying ui intent");
        match intent {
            UiIntent::Console(action) => {
                changed |= console.dispatch(action);
            }
            UiIntent::DismissNotice => {
                changed |= notice.take().is_some();
            }
            other => {
                if let Some(feature) = other.inert_feature() {
                    tracing::info!(intent = other.name(), "inert control used");
                    *notice = Some(Notice::info(format!(
                        "{feature} is not available in this demo."
                    )));
                    changed = true;
                }
            }
        }
    }
    changed
}
