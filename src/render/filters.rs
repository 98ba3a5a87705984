//! MiniJinja filter registration.

use minijinja::{Environment, Value};

use super::output::OutputMode;
use crate::theme::Theme;
use crate::util::fit_to_width;

/// Registers the report filters on a minijinja environment.
///
/// - `style(name)`: applies a theme style
/// - `pad(width)`: truncates or right-pads to a column width
/// - `nl`: appends a newline
pub(crate) fn register_filters(env: &mut Environment<'static>, theme: Theme, mode: OutputMode) {
    let is_debug = mode.is_debug();
    let use_color = mode.should_use_color();

    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if is_debug {
            theme.apply_debug(&name, &text)
        } else {
            theme.apply(&name, &text, use_color)
        }
    });

    // Padding must happen before styling; escape codes have no width.
    env.add_filter("pad", |value: Value, width: usize| -> String {
        fit_to_width(&value.to_string(), width)
    });

    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });
}
