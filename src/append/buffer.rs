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

use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::Error;

/// A sink that accumulates every line in memory, mostly useful in tests.
#[derive(Debug, Default)]
pub(crate) struct Buffer {
    text: Mutex<String>,
}

impl Buffer {
    fn lock(&self) -> MutexGuard<'_, String> {
        // a panic while holding the lock leaves the text as appended so far
        self.text.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self, line: &str) -> Result<(), Error> {
        self.lock().push_str(line);
        Ok(())
    }

    /// All text written so far.
    pub(crate) fn string(&self) -> String {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_lines() {
        let buffer = Buffer::default();
        assert!(buffer.string().is_empty());
        buffer.write("first\n").unwrap();
        buffer.write("second\n").unwrap();
        assert_eq!(buffer.string(), "first\nsecond\n");
    }
}
