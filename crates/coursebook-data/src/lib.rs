//! # Coursebook Data
//!
//! The record collections served by the API, loaded once before the listener
//! starts and never mutated afterwards.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use coursebook_data::Directory;
//!
//! let directory = Arc::new(Directory::load("./data")?);
//! println!("{} users", directory.users().len());
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::info;

use coursebook_models::{Course, Instructor, User};

pub const USERS_FILE: &str = "users.json";
pub const INSTRUCTORS_FILE: &str = "instructors.json";
pub const COURSES_FILE: &str = "courses.json";

/// Immutable snapshot of every collection.
///
/// There is no mutation path: collections are only reachable through shared
/// slices, so concurrent readers need no locking.
#[derive(Debug, Default)]
pub struct Directory {
    users: Vec<User>,
    instructors: Vec<Instructor>,
    courses: Vec<Course>,
}

impl Directory {
    pub fn new(users: Vec<User>, instructors: Vec<Instructor>, courses: Vec<Course>) -> Self {
        Self {
            users,
            instructors,
            courses,
        }
    }

    /// Loads `courses.json`, `instructors.json` and `users.json` from `dir`.
    ///
    /// # Errors
    ///
    /// Fails on the first file that cannot be read or parsed. Callers treat
    /// this as fatal: the server must not start without its data.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        let courses: Vec<Course> =
            read_collection(&dir.join(COURSES_FILE)).context("Could not read courses data")?;
        let instructors: Vec<Instructor> = read_collection(&dir.join(INSTRUCTORS_FILE))
            .context("Could not read instructors data")?;
        let users: Vec<User> =
            read_collection(&dir.join(USERS_FILE)).context("Could not read users data")?;

        info!(
            data_dir = %dir.display(),
            users = users.len(),
            instructors = instructors.len(),
            courses = courses.len(),
            "Directory loaded"
        );

        Ok(Self::new(users, instructors, courses))
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}
