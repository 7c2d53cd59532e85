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

//! Coercion of caller values into message text.

use std::backtrace::Backtrace;
use std::backtrace::BacktraceStatus;
use std::borrow::Cow;
use std::fmt;

/// A value that can be logged.
///
/// Any value is coercible to text:
///
/// * strings are used as-is;
/// * errors render as `"<message> (<kind>)\n<trace>"`, where the trace lines are empty if none
///   was captured;
/// * any other value renders via its [`Debug`](fmt::Debug) representation.
///
/// # Examples
///
/// ```
/// use pyer_logforth::Message;
///
/// assert_eq!(Message::from("plain").to_string(), "plain");
/// assert_eq!(Message::debug(&vec![1, 2]).to_string(), "[1, 2]");
/// assert_eq!(Message::from(None::<&str>).to_string(), "");
/// ```
pub enum Message<'a> {
    /// Text used as-is.
    Text(Cow<'a, str>),
    /// An error value and the name of its type.
    Error {
        error: &'a (dyn std::error::Error + 'static),
        kind: &'static str,
        trace: Option<&'a Backtrace>,
    },
    /// Any other value, rendered with `{:?}`.
    Debug(&'a dyn fmt::Debug),
}

impl<'a> Message<'a> {
    /// An empty message.
    pub const fn empty() -> Self {
        Message::Text(Cow::Borrowed(""))
    }

    /// A message rendering an error, named after its concrete type.
    pub fn error<E>(error: &'a E) -> Self
    where
        E: std::error::Error + 'static,
    {
        Message::Error {
            error,
            kind: std::any::type_name::<E>(),
            trace: None,
        }
    }

    /// A message rendering an error together with a captured backtrace.
    pub fn error_with_trace<E>(error: &'a E, trace: &'a Backtrace) -> Self
    where
        E: std::error::Error + 'static,
    {
        Message::Error {
            error,
            kind: std::any::type_name::<E>(),
            trace: Some(trace),
        }
    }

    /// A message rendering any value with its `Debug` representation.
    pub fn debug(value: &'a dyn fmt::Debug) -> Self {
        Message::Debug(value)
    }

    /// Render this message into owned text, borrowing when it is already text.
    pub fn render(&self) -> Cow<'a, str> {
        match self {
            Message::Text(text) => text.clone(),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(text) => f.write_str(text),
            Message::Error { error, kind, trace } => {
                writeln!(f, "{error} ({kind})")?;
                if let Some(trace) = trace {
                    if trace.status() == BacktraceStatus::Captured {
                        let trace = trace.to_string();
                        f.write_str(&trace.lines().collect::<Vec<_>>().join("\n"))?;
                    }
                }
                Ok(())
            }
            Message::Debug(value) => write!(f, "{value:?}"),
        }
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Message").field(&self.to_string()).finish()
    }
}

impl Default for Message<'_> {
    fn default() -> Self {
        Message::empty()
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Message::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Message<'a> {
    fn from(text: &'a String) -> Self {
        Message::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Message<'_> {
    fn from(text: String) -> Self {
        Message::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Message<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Message::Text(text)
    }
}

impl<'a> From<fmt::Arguments<'a>> for Message<'a> {
    fn from(args: fmt::Arguments<'a>) -> Self {
        match args.as_str() {
            Some(text) => Message::Text(Cow::Borrowed(text)),
            None => Message::Text(Cow::Owned(args.to_string())),
        }
    }
}

impl<'a> From<&'a anyhow::Error> for Message<'a> {
    fn from(error: &'a anyhow::Error) -> Self {
        Message::Error {
            error: &**error,
            kind: "anyhow::Error",
            trace: Some(error.backtrace()),
        }
    }
}

impl<'a, T> From<Option<T>> for Message<'a>
where
    T: Into<Message<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_text_is_used_as_is() {
        assert_eq!(Message::from("hello").to_string(), "hello");
        assert_eq!(Message::from(String::from("owned")).to_string(), "owned");
        let s = String::from("borrowed");
        assert!(matches!(Message::from(&s).render(), Cow::Borrowed("borrowed")));
    }

    #[test]
    fn test_absent_message_is_empty() {
        assert_eq!(Message::from(None::<String>).to_string(), "");
        assert_eq!(Message::default().to_string(), "");
        assert_eq!(Message::from(Some("x")).to_string(), "x");
    }

    #[test]
    fn test_error_names_its_kind() {
        let err = io::Error::new(io::ErrorKind::Other, "disk on fire");
        let kind = std::any::type_name::<io::Error>();
        assert_eq!(
            Message::error(&err).to_string(),
            format!("disk on fire ({kind})\n")
        );
    }

    #[test]
    fn test_error_with_disabled_trace() {
        let err = io::Error::new(io::ErrorKind::Other, "boom");
        let trace = Backtrace::disabled();
        let kind = std::any::type_name::<io::Error>();
        assert_eq!(
            Message::error_with_trace(&err, &trace).to_string(),
            format!("boom ({kind})\n")
        );
    }

    #[test]
    fn test_error_with_captured_trace() {
        let err = io::Error::new(io::ErrorKind::Other, "boom");
        let trace = Backtrace::force_capture();
        let kind = std::any::type_name::<io::Error>();
        let text = Message::error_with_trace(&err, &trace).to_string();
        assert!(text.starts_with(&format!("boom ({kind})\n")), "{text}");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_anyhow_error() {
        let err = anyhow::anyhow!("argument mismatch");
        let text = Message::from(&err).to_string();
        assert!(text.starts_with("argument mismatch (anyhow::Error)\n"), "{text}");
    }

    #[test]
    fn test_other_values_use_debug() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Point {
            x: i32,
            y: i32,
        }

        let point = Point { x: 1, y: 2 };
        assert_eq!(Message::debug(&point).to_string(), "Point { x: 1, y: 2 }");
        assert_eq!(Message::debug(&"quoted").to_string(), "\"quoted\"");
    }

    #[test]
    fn test_format_args() {
        let n = 2;
        assert_eq!(Message::from(format_args!("static")).to_string(), "static");
        assert_eq!(Message::from(format_args!("n={n}")).to_string(), "n=2");
    }
}
