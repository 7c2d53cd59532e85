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

//! Sinks that formatted lines are written to.

use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use crate::Error;

mod buffer;
mod file;
mod stdio;

use self::buffer::Buffer;
use self::file::File;
use self::stdio::Stderr;
use self::stdio::Stdout;

/// Where a logger should write, as given at construction time.
///
/// Strings and paths convert into [`Target::File`]; an absent `Option` converts into
/// [`Target::None`].
///
/// # Examples
///
/// ```
/// use pyer_logforth::append::Target;
///
/// assert_eq!(Target::from("app.log"), Target::File("app.log".into()));
/// assert_eq!(Target::from(None::<&str>), Target::None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Standard output, with colored labels.
    Stdout,
    /// Standard error, with colored labels.
    Stderr,
    /// An in-memory buffer, with plain labels.
    Buffer,
    /// A file opened for append, with plain labels.
    File(PathBuf),
    /// No sink at all. See [`NullTarget`].
    None,
}

impl From<&str> for Target {
    fn from(path: &str) -> Self {
        Target::File(PathBuf::from(path))
    }
}

impl From<String> for Target {
    fn from(path: String) -> Self {
        Target::File(PathBuf::from(path))
    }
}

impl From<&Path> for Target {
    fn from(path: &Path) -> Self {
        Target::File(path.to_path_buf())
    }
}

impl From<PathBuf> for Target {
    fn from(path: PathBuf) -> Self {
        Target::File(path)
    }
}

impl<T: Into<Target>> From<Option<T>> for Target {
    fn from(target: Option<T>) -> Self {
        target.map_or(Target::None, Into::into)
    }
}

/// What a logger built with [`Target::None`] does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NullTarget {
    /// Keep no sink: every call is a successful no-op.
    #[default]
    Discard,
    /// Write to standard error, but force the threshold to [`Level::None`](crate::Level::None)
    /// so nothing is emitted until the level is lowered.
    StderrSuppressed,
}

/// The kind of sink a logger writes to, as resolved from its [`Target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    /// Standard output or standard error.
    Console,
    /// A file.
    File,
    /// An in-memory buffer.
    Buffer,
    /// No sink.
    Discard,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SinkKind::Console => "console",
            SinkKind::File => "file",
            SinkKind::Buffer => "buffer",
            SinkKind::Discard => "discard",
        })
    }
}

/// An open output destination, decided once when a logger is built.
#[derive(Debug)]
pub(crate) enum Sink {
    Stdout(Stdout),
    Stderr(Stderr),
    File(File),
    Buffer(Buffer),
    /// Built from [`Target::None`] under [`NullTarget::Discard`].
    Discard,
}

impl Sink {
    /// Open the sink described by a target.
    ///
    /// [`Target::None`] resolves to [`Sink::Discard`]; the logger builder applies the
    /// [`NullTarget`] policy before calling this.
    ///
    /// # Errors
    ///
    /// Returns an error if a log file cannot be opened for append.
    pub(crate) fn open(target: Target) -> Result<Sink, Error> {
        let sink = match target {
            Target::Stdout => Sink::Stdout(Stdout::default()),
            Target::Stderr => Sink::Stderr(Stderr::default()),
            Target::Buffer => Sink::Buffer(Buffer::default()),
            Target::File(path) => Sink::File(File::open(path)?),
            Target::None => Sink::Discard,
        };
        Ok(sink)
    }

    /// The kind of this sink.
    pub(crate) fn kind(&self) -> SinkKind {
        match self {
            Sink::Stdout(_) | Sink::Stderr(_) => SinkKind::Console,
            Sink::File(_) => SinkKind::File,
            Sink::Buffer(_) => SinkKind::Buffer,
            Sink::Discard => SinkKind::Discard,
        }
    }

    /// Write one formatted line.
    pub(crate) fn write(&self, line: &str) -> Result<(), Error> {
        match self {
            Sink::Stdout(sink) => sink.write(line),
            Sink::Stderr(sink) => sink.write(line),
            Sink::File(sink) => sink.write(line),
            Sink::Buffer(sink) => sink.write(line),
            Sink::Discard => Ok(()),
        }
    }

    /// Flush any pending output.
    pub(crate) fn flush(&self) -> Result<(), Error> {
        match self {
            Sink::Stdout(sink) => sink.flush(),
            Sink::Stderr(sink) => sink.flush(),
            Sink::File(sink) => sink.flush(),
            Sink::Buffer(_) | Sink::Discard => Ok(()),
        }
    }

    /// Release the sink. Only file sinks hold anything to release; closing twice is fine.
    pub(crate) fn close(&self) -> Result<(), Error> {
        match self {
            Sink::File(sink) => sink.close(),
            _ => Ok(()),
        }
    }

    /// All text written so far to a buffer sink, or an empty string for any other sink.
    pub(crate) fn string(&self) -> String {
        match self {
            Sink::Buffer(sink) => sink.string(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_conversions() {
        assert_eq!(Target::from("a.log"), Target::File(PathBuf::from("a.log")));
        assert_eq!(
            Target::from(String::from("b.log")),
            Target::File(PathBuf::from("b.log"))
        );
        assert_eq!(
            Target::from(Path::new("c.log")),
            Target::File(PathBuf::from("c.log"))
        );
        assert_eq!(Target::from(Some("d.log")), Target::File(PathBuf::from("d.log")));
        assert_eq!(Target::from(None::<PathBuf>), Target::None);
    }

    #[test]
    fn test_sink_kinds() {
        assert_eq!(Sink::open(Target::Stdout).unwrap().kind(), SinkKind::Console);
        assert_eq!(Sink::open(Target::Stderr).unwrap().kind(), SinkKind::Console);
        assert_eq!(Sink::open(Target::Buffer).unwrap().kind(), SinkKind::Buffer);
        assert_eq!(Sink::open(Target::None).unwrap().kind(), SinkKind::Discard);
    }

    #[test]
    fn test_sink_kind_names() {
        assert_eq!(SinkKind::Console.to_string(), "console");
        assert_eq!(SinkKind::File.to_string(), "file");
        assert_eq!(SinkKind::Buffer.to_string(), "buffer");
        assert_eq!(SinkKind::Discard.to_string(), "discard");
    }

    #[test]
    fn test_only_buffer_exposes_text() {
        let buffer = Sink::open(Target::Buffer).unwrap();
        buffer.write("line\n").unwrap();
        assert_eq!(buffer.string(), "line\n");

        let discard = Sink::Discard;
        discard.write("line\n").unwrap();
        assert_eq!(discard.string(), "");
        discard.close().unwrap();
        discard.close().unwrap();
    }
}
