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

use std::io::Write;

use crate::Error;
use crate::ErrorKind;
use crate::append::SinkKind;

/// A sink that prints lines to stdout.
#[derive(Debug, Default)]
#[non_exhaustive]
pub(crate) struct Stdout {}

impl Stdout {
    pub(crate) fn write(&self, line: &str) -> Result<(), Error> {
        std::io::stdout()
            .lock()
            .write_all(line.as_bytes())
            .map_err(|err| console_error(ErrorKind::Write, err))
    }

    pub(crate) fn flush(&self) -> Result<(), Error> {
        std::io::stdout()
            .flush()
            .map_err(|err| console_error(ErrorKind::Flush, err))
    }
}

/// A sink that prints lines to stderr.
#[derive(Debug, Default)]
#[non_exhaustive]
pub(crate) struct Stderr {}

impl Stderr {
    pub(crate) fn write(&self, line: &str) -> Result<(), Error> {
        std::io::stderr()
            .lock()
            .write_all(line.as_bytes())
            .map_err(|err| console_error(ErrorKind::Write, err))
    }

    pub(crate) fn flush(&self) -> Result<(), Error> {
        std::io::stderr()
            .flush()
            .map_err(|err| console_error(ErrorKind::Flush, err))
    }
}

fn console_error(kind: ErrorKind, err: std::io::Error) -> Error {
    Error::new(kind).with_sink(SinkKind::Console).with_source(err)
}
