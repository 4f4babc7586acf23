// SPDX-License-Identifier: MPL-2.0
//! A single notification: severity, localized message, and dismiss policy.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// i18n key of the toast shown when a collaborator reports a failure.
pub const ACTION_FAILED_KEY: &str = "notification-action-failed";

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Text glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "ℹ",
            Severity::Warning | Severity::Error => "⚠",
        }
    }

    /// `None` means manual dismiss.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A notification waiting for, or in, the toast overlay.
///
/// The message is stored as an i18n key plus arguments and resolved at
/// render time, so a language switch also updates visible toasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    dismiss_after: Option<Duration>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            dismiss_after: severity.auto_dismiss_duration(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Error toast for a failed collaborator call, carrying the error text
    /// as `$detail`.
    #[must_use]
    pub fn failure(error: &Error) -> Self {
        Self::error(ACTION_FAILED_KEY).with_arg("detail", error.to_string())
    }

    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Overrides the severity's default display time.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.dismiss_after = Some(duration);
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn dismiss_after(&self) -> Option<Duration> {
        self.dismiss_after
    }

    /// Localized message text.
    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        if self.message_args.is_empty() {
            return i18n.tr(&self.message_key);
        }

        let args: Vec<(&str, &str)> = self
            .message_args
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        i18n.tr_with_args(&self.message_key, &args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
        assert!(Notification::error("x").dismiss_after().is_none());
    }

    #[test]
    fn warning_lasts_longer_than_success() {
        assert!(
            Severity::Warning.auto_dismiss_duration() > Severity::Success.auto_dismiss_duration()
        );
    }

    #[test]
    fn auto_dismiss_overrides_severity_default() {
        let notification = Notification::error("x").auto_dismiss(Duration::from_secs(1));
        assert_eq!(notification.dismiss_after(), Some(Duration::from_secs(1)));
    }

    #[test]
    fn failure_carries_error_text() {
        let notification = Notification::failure(&Error::Plan("bad json".into()));
        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message_key(), ACTION_FAILED_KEY);
        assert_eq!(
            notification.message_args(),
            &[("detail".to_string(), "Plan Error: bad json".to_string())]
        );
    }

    #[test]
    fn text_interpolates_arguments() {
        let i18n = I18n::default();
        let notification = Notification::failure(&Error::External("offline".into()));
        let text = notification.text(&i18n);
        assert!(text.ends_with("External Link Error: offline"), "got {text}");
    }
}
