//! # Coursebook Models
//!
//! Records served by the Coursebook API and the query parameters that filter
//! them.
//!
//! - [`users`]: [`User`] and [`UserFilterParams`]
//! - [`instructors`]: [`Instructor`] and [`InstructorFilterParams`]
//! - [`courses`]: [`Course`] and [`CourseFilterParams`]
//!
//! Every filter type exposes `admits(&record)`, the AND of all its
//! constraints. Unconstrained filters admit every record.

pub mod courses;
pub mod instructors;
pub mod users;

pub use courses::{Course, CourseFilterParams};
pub use instructors::{Instructor, InstructorFilterParams};
pub use users::{User, UserFilterParams};

pub use coursebook_core::filter::Record;
