use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Protected endpoint echoing the identity asserted by the bearer token.
pub async fn profile(
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiSuccess<ProfileResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        ProfileResponseData {
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}
