pub mod auth;
pub mod courses;
pub mod instructors;
pub mod users;
