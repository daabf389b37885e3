//! Browser console logging with a styled `[landing]` prefix.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Warn,
}

impl Level {
    fn style(self) -> &'static str {
        match self {
            Level::Info => "color: #2563eb; font-weight: bold;",
            Level::Warn => "color: #d97706; font-weight: bold;",
        }
    }
}

fn format_line(message: &str) -> String {
    format!("%c[landing]%c {message}")
}

fn emit(level: Level, message: &str) {
    let line = JsValue::from_str(&format_line(message));
    let prefix = JsValue::from_str(level.style());
    let body = JsValue::from_str("");
    match level {
        Level::Info => web_sys::console::log_3(&line, &prefix, &body),
        Level::Warn => web_sys::console::warn_3(&line, &prefix, &body),
    }
}

pub fn info(message: &str) {
    emit(Level::Info, message);
}

pub fn warn(message: &str) {
    emit(Level::Warn, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_carries_two_style_slots() {
        let line = format_line("mounted");
        assert_eq!(line, "%c[landing]%c mounted");
        assert_eq!(line.matches("%c").count(), 2);
    }

    #[test]
    fn levels_are_colored_differently() {
        assert_ne!(Level::Info.style(), Level::Warn.style());
    }
}
