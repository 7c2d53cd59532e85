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

use crate::Level;

static DEFAULT_LEVEL: AtomicU8 = AtomicU8::new(Level::Debug.rank());

/// Set the process-wide default threshold.
///
/// Loggers built afterwards without an explicit level start at this threshold. Loggers built
/// before keep their own threshold.
pub fn set_default_level(level: Level) {
    DEFAULT_LEVEL.store(level.rank(), Ordering::Relaxed);
}

/// The process-wide default threshold. Starts at [`Level::Debug`].
pub fn default_level() -> Level {
    level_from_rank(DEFAULT_LEVEL.load(Ordering::Relaxed))
}

// ranks are only ever stored from a `Level`
pub(crate) fn level_from_rank(rank: u8) -> Level {
    Level::try_from(rank).unwrap_or(Level::None)
}
