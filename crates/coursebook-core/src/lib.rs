//! # Coursebook Core
//!
//! Foundational types shared by every Coursebook crate:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`filter`]: Multi-valued attribute matching used by every list endpoint
//!
//! # Example
//!
//! ```ignore
//! use coursebook_core::filter::FilterCriteria;
//!
//! let criteria = FilterCriteria::new(vec!["GO".to_string(), "rust".to_string()]);
//! assert!(criteria.matches(&["go", "rust", "go"]));
//! ```

pub mod errors;
pub mod filter;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use filter::{FilterCriteria, Record, UNCONSTRAINED_ID};
