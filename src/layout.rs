// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Layouts turning a prefix, a label and a message into one line.

use std::fmt;
use std::fmt::Write;

use jiff::Zoned;
use jiff::tz::TimeZone;

/// A layout formats one log line.
///
/// A layout never looks at the sink or the threshold of the logger using it.
pub trait Layout: fmt::Debug + Send + Sync + 'static {
    /// Formats one line, including the trailing newline.
    fn format(&self, prefix: &str, label: &str, message: Option<&str>) -> String;
}

impl<T: Layout> From<T> for Box<dyn Layout> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A layout that formats a line as text.
///
/// Output format:
///
/// ```text
/// 2024-08-11 22:44:57.172105 [ 4242]       Sample DEBUG  debug
/// 2024-08-11 22:44:57.172219 [ 4242]       Sample INFO   information
/// 2024-08-11 22:44:57.172276 [ 4242]       Sample WARN   warning
/// 2024-08-11 22:44:57.172329 [ 4242]       Sample ERROR  error
/// ```
///
/// The process id is right-justified to five characters and the prefix to twelve. The label is
/// written as given, so colored labels keep their escape codes.
///
/// You can customize the timezone of the timestamp by setting the `tz` field with a [`TimeZone`]
/// instance. Otherwise, the system timezone is used.
///
/// # Examples
///
/// ```
/// use pyer_logforth::layout::Layout;
/// use pyer_logforth::layout::TextLayout;
///
/// let line = TextLayout::default().format("KLASS", "LABEL", Some("message"));
/// assert!(line.ends_with("  KLASS LABEL  message\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    tz: Option<TimeZone>,
}

impl TextLayout {
    /// Set the timezone for timestamps.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use pyer_logforth::layout::TextLayout;
    ///
    /// let layout = TextLayout::default().timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }

    fn now(&self) -> Zoned {
        match self.tz.clone() {
            Some(tz) => Zoned::now().with_time_zone(tz),
            None => Zoned::now(),
        }
    }
}

impl Layout for TextLayout {
    fn format(&self, prefix: &str, label: &str, message: Option<&str>) -> String {
        let time = self.now().strftime("%Y-%m-%d %H:%M:%S.%6f");
        let pid = std::process::id();
        let message = message.unwrap_or_default();

        let mut text = String::new();
        // SAFETY: write to a string always succeeds
        writeln!(&mut text, "{time} [{pid:>5}] {prefix:>12} {label}  {message}").unwrap();
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_timestamp(s: &str) -> bool {
        let bytes = s.as_bytes();
        if bytes.len() != 26 {
            return false;
        }
        bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 | 16 => *b == b':',
            19 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
    }

    #[test]
    fn test_format_with_message() {
        let line = TextLayout::default().format("prefix", "LABEL", Some("message"));
        assert!(line.ends_with(" prefix LABEL  message\n"), "{line:?}");
    }

    #[test]
    fn test_format_without_message() {
        let line = TextLayout::default().format("prefix", "LABEL", None);
        assert!(line.ends_with(" prefix LABEL  \n"), "{line:?}");
    }

    #[test]
    fn test_format_fields() {
        let line = TextLayout::default()
            .timezone(TimeZone::UTC)
            .format("", "INFO ", Some("hello"));

        assert!(is_timestamp(&line[..26]), "{line:?}");
        let rest = &line[26..];
        let pid = format!(" [{:>5}] ", std::process::id());
        assert!(rest.starts_with(&pid), "{line:?}");
        let rest = &rest[pid.len()..];
        assert_eq!(rest, format!("{:>12} INFO   hello\n", ""));
    }

    #[test]
    fn test_long_prefix_is_not_truncated() {
        let line = TextLayout::default().format("a_rather_long_prefix", "WARN ", Some("x"));
        assert!(line.ends_with("] a_rather_long_prefix WARN   x\n"), "{line:?}");
    }
}
