//! User API types

use serde::{Deserialize, Serialize};

use crate::domain::User;

/// User as returned over HTTP
///
/// The encrypted password never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            email: user.email().to_string(),
            is_admin: user.is_admin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::ReversingHasher;
    use crate::domain::{CreateUserParams, NewUser, UserId};

    #[test]
    fn test_response_omits_password() {
        let params = CreateUserParams {
            first_name: "James".to_string(),
            last_name: "Foo".to_string(),
            email: "james@foo.com".to_string(),
            password: "supersecret".to_string(),
        };
        let user = NewUser::from_params(params, &ReversingHasher)
            .unwrap()
            .with_id(UserId::generate());

        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(json["id"], user.id().to_string());
        assert_eq!(json["firstName"], "James");
        assert_eq!(json["lastName"], "Foo");
        assert_eq!(json["email"], "james@foo.com");
        assert_eq!(json["isAdmin"], false);
        assert_eq!(json.as_object().unwrap().len(), 5);
    }
}
