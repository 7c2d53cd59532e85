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

use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;

use crate::Error;
use crate::Level;
use crate::Message;
use crate::append::Sink;
use crate::append::SinkKind;
use crate::append::Target;
use crate::layout::Layout;
use crate::level::Labels;

mod builder;
mod defaults;

pub use self::builder::LoggerBuilder;
pub use self::defaults::default_level;
pub use self::defaults::set_default_level;

/// A leveled logger writing one line per message to a single sink.
///
/// Each message level has two methods: one taking a literal message, and a `_with` variant that
/// also takes a producer. The producer is only called when the message passes the threshold,
/// and its result is appended to the literal.
///
/// # Examples
///
/// ```
/// use pyer_logforth::Level;
/// use pyer_logforth::Logger;
/// use pyer_logforth::append::Target;
///
/// let log = Logger::builder(Target::Buffer)
///     .default_level(Level::Debug)
///     .build()
///     .unwrap();
///
/// log.error_with("Argument ", || "foo mismatch").unwrap();
/// assert!(log.string().ends_with(" ERROR  Argument foo mismatch\n"));
///
/// log.set_level(Level::Error);
/// log.warn_with("never ", || -> String { unreachable!() }).unwrap();
/// ```
#[derive(Debug)]
pub struct Logger {
    level: AtomicU8,
    prefix: String,
    sink: Sink,
    labels: Labels,
    layout: Box<dyn Layout>,
}

impl Logger {
    /// Create a [`LoggerBuilder`] writing to the given target.
    pub fn builder(target: impl Into<Target>) -> LoggerBuilder {
        LoggerBuilder::new(target)
    }

    /// Create a logger writing to the given target, with an empty prefix and the process-wide
    /// default threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is a file that cannot be opened for append.
    pub fn new(target: impl Into<Target>) -> Result<Logger, Error> {
        LoggerBuilder::new(target).build()
    }

    pub(crate) fn from_parts(
        level: Level,
        prefix: String,
        sink: Sink,
        labels: Labels,
        layout: Box<dyn Layout>,
    ) -> Self {
        Self {
            level: AtomicU8::new(level.rank()),
            prefix,
            sink,
            labels,
            layout,
        }
    }

    /// The current threshold.
    pub fn level(&self) -> Level {
        defaults::level_from_rank(self.level.load(Ordering::Relaxed))
    }

    /// Change the threshold. Takes effect on the next call.
    pub fn set_level(&self, level: Level) {
        self.level.store(level.rank(), Ordering::Relaxed);
    }

    /// The prefix written in every line.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The kind of sink this logger writes to.
    pub fn sink_kind(&self) -> SinkKind {
        self.sink.kind()
    }

    /// The label written for the given level.
    pub fn label(&self, level: Level) -> &str {
        self.labels.get(level)
    }

    /// All text written so far, for a buffer sink; an empty string otherwise.
    pub fn string(&self) -> String {
        self.sink.string()
    }

    /// Whether a message at `level` would currently be written.
    ///
    /// Always false for [`Level::None`], which is not a message level.
    pub fn enabled(&self, level: Level) -> bool {
        level != Level::None && level >= self.level()
    }

    /// Whether a `debug` message would currently be written.
    pub fn debug_enabled(&self) -> bool {
        self.enabled(Level::Debug)
    }

    /// Whether an `info` message would currently be written.
    pub fn info_enabled(&self) -> bool {
        self.enabled(Level::Info)
    }

    /// Whether a `warn` message would currently be written.
    pub fn warn_enabled(&self) -> bool {
        self.enabled(Level::Warn)
    }

    /// Whether an `error` message would currently be written.
    pub fn error_enabled(&self) -> bool {
        self.enabled(Level::Error)
    }

    /// Log a debug message.
    pub fn debug<'a>(&self, message: impl Into<Message<'a>>) -> Result<(), Error> {
        self.add(Level::Debug, message.into(), None::<fn() -> Message<'static>>)
    }

    /// Log a debug message, appending the producer's result to `message`.
    pub fn debug_with<'a, 'b, M>(
        &self,
        message: impl Into<Message<'a>>,
        producer: impl FnOnce() -> M,
    ) -> Result<(), Error>
    where
        M: Into<Message<'b>>,
    {
        self.add(Level::Debug, message.into(), Some(|| producer().into()))
    }

    /// Log an info message.
    pub fn info<'a>(&self, message: impl Into<Message<'a>>) -> Result<(), Error> {
        self.add(Level::Info, message.into(), None::<fn() -> Message<'static>>)
    }

    /// Log an info message, appending the producer's result to `message`.
    pub fn info_with<'a, 'b, M>(
        &self,
        message: impl Into<Message<'a>>,
        producer: impl FnOnce() -> M,
    ) -> Result<(), Error>
    where
        M: Into<Message<'b>>,
    {
        self.add(Level::Info, message.into(), Some(|| producer().into()))
    }

    /// Log a warning message.
    pub fn warn<'a>(&self, message: impl Into<Message<'a>>) -> Result<(), Error> {
        self.add(Level::Warn, message.into(), None::<fn() -> Message<'static>>)
    }

    /// Log a warning message, appending the producer's result to `message`.
    pub fn warn_with<'a, 'b, M>(
        &self,
        message: impl Into<Message<'a>>,
        producer: impl FnOnce() -> M,
    ) -> Result<(), Error>
    where
        M: Into<Message<'b>>,
    {
        self.add(Level::Warn, message.into(), Some(|| producer().into()))
    }

    /// Log an error message.
    pub fn error<'a>(&self, message: impl Into<Message<'a>>) -> Result<(), Error> {
        self.add(Level::Error, message.into(), None::<fn() -> Message<'static>>)
    }

    /// Log an error message, appending the producer's result to `message`.
    pub fn error_with<'a, 'b, M>(
        &self,
        message: impl Into<Message<'a>>,
        producer: impl FnOnce() -> M,
    ) -> Result<(), Error>
    where
        M: Into<Message<'b>>,
    {
        self.add(Level::Error, message.into(), Some(|| producer().into()))
    }

    /// Flush console and file sinks.
    pub fn flush(&self) -> Result<(), Error> {
        self.sink.flush()
    }

    /// Release the sink. For a file sink, flush and close the handle; closing twice is fine.
    /// Any other sink is left as is, so a buffer stays readable.
    pub fn close(&self) -> Result<(), Error> {
        self.sink.close()
    }

    pub(crate) fn add<'b, P>(
        &self,
        level: Level,
        message: Message<'_>,
        producer: Option<P>,
    ) -> Result<(), Error>
    where
        P: FnOnce() -> Message<'b>,
    {
        if self.sink.kind() == SinkKind::Discard || !self.enabled(level) {
            return Ok(());
        }

        let mut text = message.render();
        if let Some(producer) = producer {
            text.to_mut().push_str(&producer().render());
        }

        let line = self
            .layout
            .format(&self.prefix, self.labels.get(level), Some(&*text));
        self.sink.write(&line)
    }
}
