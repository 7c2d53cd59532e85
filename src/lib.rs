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

//! A small leveled logger.
//!
//! # Overview
//!
//! Each [`Logger`] has a threshold, a prefix and exactly one sink: standard output, standard
//! error, an append-only file or an in-memory buffer. Messages below the threshold are dropped
//! without evaluating their producer; the others are written as a single line:
//!
//! ```text
//! 2024-08-11 22:44:57.172105 [ 4242]       Sample INFO   information
//! ```
//!
//! Console sinks color the level label with an ANSI background; files and buffers get plain
//! labels.
//!
//! # Examples
//!
//! ```
//! use pyer_logforth::Level;
//! use pyer_logforth::Logger;
//! use pyer_logforth::append::Target;
//!
//! let log = Logger::builder(Target::Stdout)
//!     .prefix("Sample")
//!     .build()
//!     .unwrap();
//!
//! log.set_level(Level::Warn);
//! log.debug("debug").unwrap();
//! log.info("information").unwrap();
//! log.warn("level is WARN").unwrap();
//! log.error_with("what ? ", || "glop ".repeat(2)).unwrap();
//! log.close().unwrap();
//! ```
//!
//! The threshold of new loggers is seeded from a process-wide default:
//!
//! ```
//! use pyer_logforth::Level;
//! use pyer_logforth::Logger;
//! use pyer_logforth::append::Target;
//!
//! pyer_logforth::set_default_level(Level::Error);
//! let log = Logger::new(Target::Buffer).unwrap();
//! assert_eq!(log.level(), Level::Error);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod layout;
pub mod level;

mod bridge;
mod error;
mod logger;
mod message;

pub use self::append::Target;
pub use self::error::Error;
pub use self::error::ErrorKind;
pub use self::layout::Layout;
pub use self::level::Level;
pub use self::logger::Logger;
pub use self::logger::LoggerBuilder;
pub use self::logger::default_level;
pub use self::logger::set_default_level;
pub use self::message::Message;
