//! Newest-file job source
//!
//! Scans one flat directory for files with the job extension and hands out
//! the most recently modified one. Lines are read lazily; a read error
//! mid-file ends the job early.

use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
    time::SystemTime,
};

use benchprint_core::job::{Job, JobSource};
use tracing::{debug, info, warn};

use crate::error::HostError;

/// Jobs are named by file name alone; the full path only goes to the log.
pub struct DirectoryJobSource {
    dir: PathBuf,
    extension: String,
}

impl DirectoryJobSource {
    /// `extension` is matched case-insensitively and without the dot
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the newest job file, if any
    ///
    /// Files with equal modification times are ordered by path.
    pub fn newest(&self) -> Result<Option<PathBuf>, HostError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| HostError::io(&self.dir, e))?;

        let mut newest: Option<(SystemTime, PathBuf)> = None;
        for entry in entries {
            let entry = entry.map_err(|e| HostError::io(&self.dir, e))?;
            let path = entry.path();
            if !self.is_job_file(&path) {
                continue;
            }

            let modified = entry
                .metadata()
                .and_then(|meta| meta.modified())
                .map_err(|e| HostError::io(&path, e))?;
            let candidate = (modified, path);
            if newest.as_ref().map_or(true, |best| candidate > *best) {
                newest = Some(candidate);
            }
        }

        Ok(newest.map(|(_, path)| path))
    }

    fn is_job_file(&self, path: &Path) -> bool {
        path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}

impl JobSource for DirectoryJobSource {
    type Line = String;
    type Lines = FileLines;

    fn find_most_recent(&mut self) -> Option<Job<FileLines>> {
        let path = match self.newest() {
            Ok(Some(path)) => path,
            Ok(None) => {
                debug!(dir = %self.dir.display(), "No job files");
                return None;
            }
            Err(e) => {
                warn!("Job scan failed: {}", e);
                return None;
            }
        };

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), "Failed to open job: {}", e);
                return None;
            }
        };

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!(path = %path.display(), "Selected job");

        Some(Job::new(&name, FileLines::new(file, path)))
    }
}

/// Lines of one job file
pub struct FileLines {
    lines: io::Lines<BufReader<File>>,
    path: PathBuf,
    done: bool,
}

impl FileLines {
    fn new(file: File, path: PathBuf) -> Self {
        Self {
            lines: BufReader::new(file).lines(),
            path,
            done: false,
        }
    }
}

impl Iterator for FileLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        match self.lines.next() {
            Some(Ok(line)) => Some(line),
            Some(Err(e)) => {
                warn!(path = %self.path.display(), "Job read failed, ending early: {}", e);
                self.done = true;
                None
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}
