use coursebook_core::filter::{FilterCriteria, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company: String,
    pub interests: Vec<String>,
}

impl Record for User {
    fn id(&self) -> i64 {
        self.id
    }
}

/// `GET /api/v1/users?interest=<v>[&interest=<v>...]`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFilterParams {
    #[serde(default)]
    pub interest: Vec<String>,
}

impl UserFilterParams {
    pub fn interests(&self) -> FilterCriteria {
        FilterCriteria::new(self.interest.clone())
    }

    pub fn admits(&self, user: &User) -> bool {
        self.interests().matches(&user.interests)
    }
}
