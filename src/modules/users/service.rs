use anyhow::anyhow;
use coursebook_core::AppError;
use coursebook_core::filter::find_by_id;
use coursebook_data::Directory;
use coursebook_models::{User, UserFilterParams};

pub struct UserService;

impl UserService {
    /// Users admitted by `params`, in directory order.
    pub fn get_users<'a>(directory: &'a Directory, params: &UserFilterParams) -> Vec<&'a User> {
        directory
            .users()
            .iter()
            .filter(|user| params.admits(user))
            .collect()
    }

    pub fn get_user_by_id(directory: &Directory, id: i64) -> Result<&User, AppError> {
        find_by_id(directory.users(), id)
            .ok_or_else(|| AppError::not_found(anyhow!("user with id not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, interests: &[&str]) -> User {
        User {
            id,
            name: format!("user-{id}"),
            email: format!("user{id}@example.com"),
            company: "Acme".to_string(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn directory() -> Directory {
        Directory::new(
            vec![
                user(1, &["go", "rust"]),
                user(2, &["python"]),
                user(3, &["Rust", "GO", "chess"]),
            ],
            vec![],
            vec![],
        )
    }

    #[test]
    fn test_get_users_unfiltered_returns_all_in_order() {
        let directory = directory();
        let ids: Vec<i64> = UserService::get_users(&directory, &UserFilterParams::default())
            .iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_get_users_by_interest() {
        let directory = directory();
        let params = UserFilterParams {
            interest: vec!["rust".to_string(), "go".to_string()],
        };
        let ids: Vec<i64> = UserService::get_users(&directory, &params)
            .iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_get_users_no_match_is_empty() {
        let directory = directory();
        let params = UserFilterParams {
            interest: vec!["cobol".to_string()],
        };
        assert!(UserService::get_users(&directory, &params).is_empty());
    }

    #[test]
    fn test_get_user_by_id() {
        let directory = directory();
        assert_eq!(UserService::get_user_by_id(&directory, 2).unwrap().id, 2);

        let err = UserService::get_user_by_id(&directory, 9999).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "user with id not found");
    }
}
