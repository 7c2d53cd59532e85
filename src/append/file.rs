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

use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::Error;
use crate::ErrorKind;

/// A sink that appends lines to a single file.
///
/// The file is opened (and created if missing) when the sink is built, and stays open until
/// [`close`](File::close) is called or the sink is dropped.
#[derive(Debug)]
pub(crate) struct File {
    path: PathBuf,
    // None once closed
    writer: Mutex<Option<fs::File>>,
}

impl File {
    /// Open `path` for append.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or opened for append. The parent
    /// directory is not created.
    pub(crate) fn open(path: impl Into<PathBuf>) -> Result<File, Error> {
        let path = path.into();
        let writer = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|err| Error::new(ErrorKind::Open).with_path(&path).with_source(err))?;

        Ok(File {
            path,
            writer: Mutex::new(Some(writer)),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Option<fs::File>> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn error(&self, kind: ErrorKind) -> Error {
        Error::new(kind).with_path(&self.path)
    }

    pub(crate) fn write(&self, line: &str) -> Result<(), Error> {
        let mut writer = self.lock();
        let writer = writer.as_mut().ok_or_else(|| self.error(ErrorKind::Closed))?;
        writer
            .write_all(line.as_bytes())
            .map_err(|err| self.error(ErrorKind::Write).with_source(err))
    }

    pub(crate) fn flush(&self) -> Result<(), Error> {
        match self.lock().as_mut() {
            Some(writer) => writer
                .flush()
                .map_err(|err| self.error(ErrorKind::Flush).with_source(err)),
            None => Ok(()),
        }
    }

    /// Flush and release the file handle. Closing an already closed file does nothing.
    pub(crate) fn close(&self) -> Result<(), Error> {
        let Some(mut writer) = self.lock().take() else {
            return Ok(());
        };
        writer
            .flush()
            .map_err(|err| self.error(ErrorKind::Flush).with_source(err))?;
        writer
            .sync_all()
            .map_err(|err| self.error(ErrorKind::Flush).with_source(err))
    }

    #[cfg(test)]
    fn is_closed(&self) -> bool {
        self.lock().is_none()
    }
}
