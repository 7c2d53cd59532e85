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

//! Severity levels and their printable labels.

use std::fmt;
use std::str::FromStr;

use colored::Color;

use crate::Error;
use crate::ErrorKind;

/// The severity of a message, or the threshold of a logger.
///
/// Levels are totally ordered by rank: `Debug < Info < Warn < Error < None`. A message is
/// emitted iff its level is greater than or equal to the logger's threshold.
///
/// [`Level::None`] is only meaningful as a threshold: it suppresses everything.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Level {
    /// Low-level information for developers.
    #[default]
    Debug = 0,
    /// Generic (useful) information about system operation.
    Info = 1,
    /// A warning.
    Warn = 2,
    /// An error condition.
    Error = 3,
    /// Suppress everything.
    None = 4,
}

impl Level {
    /// All levels, ordered by rank.
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::None,
    ];

    /// The integer rank of this level.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// The upper-case name of this level.
    pub const fn name(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::None => "NONE",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl TryFrom<u8> for Level {
    type Error = Error;

    fn try_from(rank: u8) -> Result<Self, Error> {
        Level::ALL
            .get(rank as usize)
            .copied()
            .ok_or_else(|| Error::new(ErrorKind::InvalidLevel).with_detail(rank))
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "none" | "off" => Ok(Level::None),
            _ => Err(Error::new(ErrorKind::InvalidLevel).with_detail(s)),
        }
    }
}

/// Plain labels, indexed by rank. Every label is five characters wide.
const PLAIN_LABELS: [&str; 5] = ["DEBUG", "INFO ", "WARN ", "ERROR", "NONE "];

/// Customize the background color of each message level on console sinks.
#[derive(Debug, Clone)]
pub struct LevelColor {
    /// Color for error level messages.
    pub error: Color,
    /// Color for warning level messages.
    pub warn: Color,
    /// Color for info level messages.
    pub info: Color,
    /// Color for debug level messages.
    pub debug: Color,
}

impl Default for LevelColor {
    fn default() -> Self {
        Self {
            error: Color::Red,
            warn: Color::Yellow,
            info: Color::Green,
            debug: Color::Blue,
        }
    }
}

impl LevelColor {
    fn color_of(&self, level: Level) -> Option<Color> {
        match level {
            Level::Debug => Some(self.debug),
            Level::Info => Some(self.info),
            Level::Warn => Some(self.warn),
            Level::Error => Some(self.error),
            Level::None => None,
        }
    }
}

/// The mapping from level to its printable label, fixed when a logger is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    labels: [String; 5],
}

impl Labels {
    /// Labels without any escape codes, for files and buffers.
    pub fn plain() -> Self {
        Self {
            labels: PLAIN_LABELS.map(String::from),
        }
    }

    /// Labels wrapped in ANSI background colors, for console sinks.
    ///
    /// The placeholder label of [`Level::None`] is left plain.
    pub fn colored(colors: &LevelColor) -> Self {
        let labels = Level::ALL.map(|level| {
            let label = PLAIN_LABELS[level.rank() as usize];
            match colors.color_of(level) {
                Some(color) => format!("\x1b[{}m{label}\x1b[m", color.to_bg_str()),
                None => label.to_string(),
            }
        });
        Self { labels }
    }

    /// The label of the given level.
    pub fn get(&self, level: Level) -> &str {
        &self.labels[level.rank() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::None);
        for (rank, level) in Level::ALL.iter().enumerate() {
            assert_eq!(level.rank() as usize, rank);
            assert_eq!(Level::try_from(rank as u8).unwrap(), *level);
        }
        let err = Level::try_from(5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLevel);
        assert_eq!(err.to_string(), "invalid level: \"5\"");
    }

    #[test]
    fn test_parse() {
        assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
        assert_eq!(" Warning ".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
        assert_eq!("off".parse::<Level>().unwrap(), Level::None);
        let err = "fatal".parse::<Level>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLevel);
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(format!("{:>5}", Level::Info), " INFO");
        assert_eq!(Level::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_plain_labels() {
        let labels = Labels::plain();
        assert_eq!(labels.get(Level::Debug), "DEBUG");
        assert_eq!(labels.get(Level::Info), "INFO ");
        assert_eq!(labels.get(Level::Warn), "WARN ");
        assert_eq!(labels.get(Level::Error), "ERROR");
        assert_eq!(labels.get(Level::None), "NONE ");
    }

    #[test]
    fn test_colored_labels() {
        let labels = Labels::colored(&LevelColor::default());
        assert_eq!(labels.get(Level::Debug), "\x1b[44mDEBUG\x1b[m");
        assert_eq!(labels.get(Level::Info), "\x1b[42mINFO \x1b[m");
        assert_eq!(labels.get(Level::Warn), "\x1b[43mWARN \x1b[m");
        assert_eq!(labels.get(Level::Error), "\x1b[41mERROR\x1b[m");
        assert_eq!(labels.get(Level::None), "NONE ");
    }

    #[test]
    fn test_custom_colors() {
        let colors = LevelColor {
            error: Color::Magenta,
            ..LevelColor::default()
        };
        let labels = Labels::colored(&colors);
        assert_eq!(labels.get(Level::Error), "\x1b[45mERROR\x1b[m");
    }
}
