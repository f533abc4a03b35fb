use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_admin::LoginAdminError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct AdminLoginRequestDto {
    /// Email address
    #[schema(example = "admin@rishtadesk.com")]
    pub email: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct AdminLoginResponse {
    /// JWT access token (short-lived)
    access_token: String,

    /// JWT refresh token (long-lived)
    refresh_token: String,

    /// Admin account id
    admin_id: String,

    /// Email address
    email: String,
}

/// Admin login
///
/// Authenticates an administrator, returns JWT access and refresh tokens.
#[utoipa::path(
    post,
    path = "/api/auth/admin/login",
    tag = "auth",
    request_body = AdminLoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<AdminLoginResponse>)
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/admin/login")]
pub async fn admin_login_handler(
    req: web::Json<AdminLoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    if dto.email.trim().is_empty() || dto.password.trim().is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Email and password are required");
    }

    info!(email = %dto.email, "Admin login attempt");

    match data
        .login_admin_use_case
        .execute(dto.email.trim(), &dto.password)
        .await
    {
        Ok(result) => {
            info!(admin_id = %result.admin_id, "Admin logged in");
            ApiResponse::success(AdminLoginResponse {
                access_token: result.access_token,
                refresh_token: result.refresh_token,
                admin_id: result.admin_id.to_string(),
                email: result.email,
            })
        }

        Err(LoginAdminError::InvalidCredentials) => {
            warn!("Admin login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginAdminError::RepositoryError(ref e)) => {
            error!(error = %e, "Admin login query failed");
            ApiResponse::internal_error()
        }

        Err(LoginAdminError::TokenError(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}
