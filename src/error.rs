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

use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use crate::append::SinkKind;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A log file could not be created or opened for append.
    Open,
    /// A line could not be written to its sink.
    Write,
    /// A sink could not be flushed or synced.
    Flush,
    /// A line was written to a file sink after it was closed.
    Closed,
    /// A level name or rank does not denote a [`Level`](crate::Level).
    InvalidLevel,
}

impl ErrorKind {
    fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Open => "failed to open log file",
            ErrorKind::Write => "failed to write log line",
            ErrorKind::Flush => "failed to flush sink",
            ErrorKind::Closed => "log file is closed",
            ErrorKind::InvalidLevel => "invalid level",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error struct of pyer-logforth.
///
/// Errors come out of sinks (opening a log file, writing a line, flushing or closing) and out
/// of level parsing. Message values themselves never fail to render.
///
/// The display form names the sink and the file involved, then the underlying cause:
///
/// ```text
/// failed to open log file (file sink at /var/log/app.log): Permission denied (os error 13)
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    sink: Option<SinkKind>,
    path: Option<PathBuf>,
    detail: Option<String>,
    source: Option<anyhow::Error>,
}

impl Error {
    /// Create a new Error of the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            sink: None,
            path: None,
            detail: None,
            source: None,
        }
    }

    pub(crate) fn with_sink(mut self, sink: SinkKind) -> Self {
        self.sink = Some(sink);
        self
    }

    pub(crate) fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sink = Some(SinkKind::File);
        self.path = Some(path.into());
        self
    }

    pub(crate) fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }

    pub(crate) fn with_source(mut self, src: impl Into<anyhow::Error>) -> Self {
        self.source = Some(src.into());
        self
    }

    /// What went wrong.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The kind of sink involved, if any.
    pub fn sink(&self) -> Option<SinkKind> {
        self.sink
    }

    /// The log file involved, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        match (self.sink, &self.path) {
            (Some(sink), Some(path)) => write!(f, " ({sink} sink at {})", path.display())?,
            (Some(sink), None) => write!(f, " ({sink} sink)")?,
            _ => {}
        }
        if let Some(detail) = &self.detail {
            write!(f, ": {detail:?}")?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.source {
            Some(source) => Some(&**source),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use super::*;

    #[test]
    fn test_display_names_the_file() {
        let err = Error::new(ErrorKind::Open)
            .with_path("/nowhere/app.log")
            .with_source(io::Error::new(io::ErrorKind::NotFound, "no such directory"));

        assert_eq!(
            err.to_string(),
            "failed to open log file (file sink at /nowhere/app.log): no such directory"
        );
        assert_eq!(err.kind(), ErrorKind::Open);
        assert_eq!(err.sink(), Some(SinkKind::File));
        assert_eq!(err.path(), Some(Path::new("/nowhere/app.log")));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display_console_sink() {
        let err = Error::new(ErrorKind::Write)
            .with_sink(SinkKind::Console)
            .with_source(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
        assert_eq!(err.to_string(), "failed to write log line (console sink): broken pipe");
        assert!(err.path().is_none());
    }

    #[test]
    fn test_display_detail() {
        let err = Error::new(ErrorKind::InvalidLevel).with_detail("fatal");
        assert_eq!(err.to_string(), "invalid level: \"fatal\"");
        assert!(err.source().is_none());
        assert!(err.sink().is_none());
    }
}
