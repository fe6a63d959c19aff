//! Small helpers shared by `view.rs`.

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Reads the current value of the `<input>` that fired `event`.
pub fn input_value(event: &InputEvent) -> String {
    let input: HtmlInputElement = event.target_unchecked_into();
    input.value()
}

/// Inline style for the progress fill.
pub fn progress_width(percent: u8) -> String {
    format!("width: {}%;", percent.min(100))
}

pub fn success_summary(successes: u32, total: u32) -> String {
    format!("{} out of {} messages sent successfully", successes, total)
}
