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
use std::io;
use std::io::Write;

use crate::Error;
use crate::Level;
use crate::Logger;
use crate::Message;

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug | log::Level::Trace => Self::Debug,
        }
    }
}

impl From<Level> for log::LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            // trace records map to debug, so a debug threshold lets them through
            Level::Debug => Self::Trace,
            Level::Info => Self::Info,
            Level::Warn => Self::Warn,
            Level::Error => Self::Error,
            Level::None => Self::Off,
        }
    }
}

impl Logger {
    /// Set up this logger as the global [`log`] backend.
    ///
    /// The global maximum level is set from the current threshold, so lowering the threshold
    /// afterwards cannot let through records the facade already dropped.
    ///
    /// # Errors
    ///
    /// An error is returned if the global logger has already been set.
    pub fn apply(self) -> Result<(), log::SetLoggerError> {
        let max_level = log::LevelFilter::from(self.level());
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Logger::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let message = Message::from(*record.args());
        let result = self.add(
            record.level().into(),
            message,
            None::<fn() -> Message<'static>>,
        );
        if let Err(err) = result {
            let args = record.args().to_string();
            report_failure(
                &mut io::stderr(),
                self,
                format_args!("failed to log {args:?}"),
                &err,
            );
        }
    }

    fn flush(&self) {
        if let Err(err) = Logger::flush(self) {
            report_failure(&mut io::stderr(), self, format_args!("failed to flush"), &err);
        }
    }
}

/// Report a failure the `log` facade has no way to return.
///
/// The line names the logger prefix and carries the error, which in turn names the sink. A
/// failing `out` is ignored: stderr is the last resort.
fn report_failure(out: &mut impl Write, logger: &Logger, action: fmt::Arguments<'_>, err: &Error) {
    let _ = writeln!(
        out,
        "pyer-logforth: {action} for logger {prefix:?}: {err}",
        prefix = logger.prefix(),
    );
}
