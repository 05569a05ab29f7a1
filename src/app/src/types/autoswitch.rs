use serde::{Deserialize, Serialize};
use serde_valid::Validate;

// `autowifi` writes its progress in the backend's own wording
const ERROR_MARKERS: [&str; 2] = ["失败", "错误"];
const SUCCESS_MARKER: &str = "成功";
const WARNING_MARKERS: [&str; 3] = ["警告", "注意", "断开"];

pub const LOG_SEPARATOR: &str = "------------------------";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// One line of the auto-switch log
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogLine {
    pub text: String,
    pub level: LogLevel,
}

impl LogLine {
    /// Classify by the markers in `text`, falling back to `level`
    pub fn new(text: impl Into<String>, level: LogLevel) -> Self {
        let text = text.into();
        let level = if ERROR_MARKERS.iter().any(|m| text.contains(m)) {
            LogLevel::Error
        } else if text.contains(SUCCESS_MARKER) {
            LogLevel::Success
        } else if WARNING_MARKERS.iter().any(|m| text.contains(m)) {
            LogLevel::Warning
        } else {
            level
        };
        Self { text, level }
    }
}

/// Non-blank lines of a script's output
pub fn parse_log_output(output: &str) -> Vec<LogLine> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| LogLine::new(line, LogLevel::Info))
        .collect()
}

/// Query of `action=wificrontab`: run the auto-switch every `interval` minutes, 0 turns it off
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct SwitchTimerRequest {
    #[validate(maximum = 59)]
    pub interval: u8,
}

impl SwitchTimerRequest {
    pub fn parse(input: &str) -> Result<Self, String> {
        let invalid = || "Enter a whole number between 0 and 59".to_string();
        let interval = input.trim().parse::<u8>().map_err(|_| invalid())?;
        let request = Self { interval };
        request.validate().map_err(|_| invalid())?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_decide_the_level() {
        assert_eq!(LogLine::new("连接 Office 成功", LogLevel::Info).level, LogLevel::Success);
        assert_eq!(LogLine::new("连接 Cafe 失败", LogLevel::Info).level, LogLevel::Error);
        assert_eq!(LogLine::new("成功 后 错误", LogLevel::Info).level, LogLevel::Error);
        assert_eq!(LogLine::new("网络 断开", LogLevel::Info).level, LogLevel::Warning);
        assert_eq!(LogLine::new("scanning", LogLevel::Info).level, LogLevel::Info);
        assert_eq!(LogLine::new("done", LogLevel::Success).level, LogLevel::Success);
    }

    #[test]
    fn output_skips_blank_lines() {
        let lines = parse_log_output("扫描热点\n\n  \n连接 Office 成功\n");

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "扫描热点");
        assert_eq!(lines[1].level, LogLevel::Success);
    }

    #[test]
    fn timer_interval_bounds() {
        assert_eq!(SwitchTimerRequest::parse("0").unwrap().interval, 0);
        assert_eq!(SwitchTimerRequest::parse(" 59 ").unwrap().interval, 59);
        assert!(SwitchTimerRequest::parse("60").is_err());
        assert!(SwitchTimerRequest::parse("-1").is_err());
        assert!(SwitchTimerRequest::parse("5.5").is_err());
        assert!(SwitchTimerRequest::parse("").is_err());
    }
}
