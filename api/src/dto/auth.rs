use bt_core::domain::entities::User;
use bt_core::services::{LoginCommand, RegisterCommand};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/auth/register`
///
/// Fields are optional so a missing one is reported as
/// "All fields are required" instead of a JSON decoding error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: Option<String>,

    pub password: Option<String>,

    #[validate(length(max = 255))]
    pub first_name: Option<String>,

    #[validate(length(max = 255))]
    pub last_name: Option<String>,

    #[validate(length(max = 255))]
    pub email: Option<String>,

    pub mobile: Option<String>,
}

impl From<RegisterRequest> for RegisterCommand {
    fn from(request: RegisterRequest) -> Self {
        RegisterCommand {
            username: request.username,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            mobile: request.mobile,
        }
    }
}

/// Body of `POST /api/auth/login`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl From<LoginRequest> for LoginCommand {
    fn from(request: LoginRequest) -> Self {
        LoginCommand {
            username: request.username,
            password: request.password,
        }
    }
}

/// Public view of a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: u64,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub mobile: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            mobile: user.mobile,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
