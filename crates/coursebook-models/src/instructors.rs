use coursebook_core::filter::{FilterCriteria, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company: String,
    pub expertise: Vec<String>,
}

impl Record for Instructor {
    fn id(&self) -> i64 {
        self.id
    }
}

/// `GET /api/v1/instructors?expertise=<v>[&expertise=<v>...]`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstructorFilterParams {
    #[serde(default)]
    pub expertise: Vec<String>,
}

impl InstructorFilterParams {
    pub fn expertise(&self) -> FilterCriteria {
        FilterCriteria::new(self.expertise.clone())
    }

    pub fn admits(&self, instructor: &Instructor) -> bool {
        self.expertise().matches(&instructor.expertise)
    }
}
