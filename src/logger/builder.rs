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

use super::Logger;
use super::defaults;
use crate::Error;
use crate::Level;
use crate::append::NullTarget;
use crate::append::Sink;
use crate::append::SinkKind;
use crate::append::Target;
use crate::layout::Layout;
use crate::layout::TextLayout;
use crate::level::LevelColor;
use crate::level::Labels;

/// A builder for [`Logger`].
///
/// # Examples
///
/// ```
/// use pyer_logforth::Level;
/// use pyer_logforth::Logger;
/// use pyer_logforth::append::Target;
///
/// let log = Logger::builder(Target::Stdout)
///     .prefix("Sample")
///     .level(Level::Warn)
///     .build()
///     .unwrap();
/// assert!(!log.info_enabled());
/// assert!(log.warn_enabled());
/// ```
#[must_use = "call `build` to construct the logger"]
#[derive(Debug)]
pub struct LoggerBuilder {
    target: Target,
    prefix: String,
    level: Option<Level>,
    default_level: Option<Level>,
    null_target: NullTarget,
    colors: LevelColor,
    no_color: bool,
    layout: Box<dyn Layout>,
}

impl LoggerBuilder {
    /// Create a builder writing to the given target.
    pub fn new(target: impl Into<Target>) -> Self {
        Self {
            target: target.into(),
            prefix: String::new(),
            level: None,
            default_level: None,
            null_target: NullTarget::default(),
            colors: LevelColor::default(),
            no_color: false,
            layout: Box::new(TextLayout::default()),
        }
    }

    /// Set the prefix written in every line. Default to an empty string.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Use the name of type `T` as the prefix.
    pub fn prefix_type<T: ?Sized>(self) -> Self {
        self.prefix(std::any::type_name::<T>())
    }

    /// Set the initial threshold, ignoring the default threshold.
    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Seed the initial threshold from this value instead of the process-wide
    /// [`default_level`](super::default_level).
    pub fn default_level(mut self, level: Level) -> Self {
        self.default_level = Some(level);
        self
    }

    /// Choose what a [`Target::None`] logger does. Default to [`NullTarget::Discard`].
    pub fn null_target(mut self, policy: NullTarget) -> Self {
        self.null_target = policy;
        self
    }

    /// Set the label colors used on console sinks.
    pub fn colors(mut self, colors: LevelColor) -> Self {
        self.colors = colors;
        self
    }

    /// Use plain labels even on console sinks.
    pub fn no_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Set the layout of each line. Default to [`TextLayout`].
    pub fn layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Open the sink and build the logger.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is a file that cannot be opened for append.
    pub fn build(self) -> Result<Logger, Error> {
        let LoggerBuilder {
            target,
            prefix,
            level,
            default_level: seed,
            null_target,
            colors,
            no_color,
            layout,
        } = self;

        let seed = seed.unwrap_or_else(defaults::default_level);
        let mut level = level.unwrap_or(seed);
        let target = match (target, null_target) {
            (Target::None, NullTarget::StderrSuppressed) => {
                level = Level::None;
                Target::Stderr
            }
            (target, _) => target,
        };

        let sink = Sink::open(target)?;
        let labels = match sink.kind() {
            SinkKind::Console if !no_color => Labels::colored(&colors),
            _ => Labels::plain(),
        };

        Ok(Logger::from_parts(level, prefix, sink, labels, layout))
    }
}
