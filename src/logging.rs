use serde_json::{Map, Number, Value};
use std::cmp::Ordering;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Emits one JSON object per event when `level` reaches `threshold`.
pub fn log_event(threshold: LogLevel, level: LogLevel, event: &str, fields: Value) {
    if level < threshold {
        return;
    }

    emit(level, &format_event(now_unix_seconds(), level, event, fields));
}

fn format_event(ts: u64, level: LogLevel, event: &str, fields: Value) -> String {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload).to_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Debug => web_sys::console::debug_1(&value),
        LogLevel::Info => web_sys::console::log_1(&value),
        LogLevel::Warn => web_sys::console::warn_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1_000.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert_eq!(LogLevel::Warn.max(LogLevel::Debug), LogLevel::Warn);
    }

    #[test]
    fn parse_accepts_known_names_case_insensitively() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), None);
    }

    #[test]
    fn formatted_event_carries_envelope_and_fields() {
        let line = format_event(
            42,
            LogLevel::Info,
            "view_transition",
            serde_json::json!({ "from": "loading", "to": "portfolio" }),
        );
        let parsed: Value = serde_json::from_str(&line).expect("valid JSON line");

        assert_eq!(parsed["ts"], 42);
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "view_transition");
        assert_eq!(parsed["to"], "portfolio");
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let line = format_event(1, LogLevel::Warn, "catalog_fallback", Value::Null);
        let parsed: Value = serde_json::from_str(&line).expect("valid JSON line");

        assert_eq!(parsed.as_object().map(|object| object.len()), Some(3));
    }
}
