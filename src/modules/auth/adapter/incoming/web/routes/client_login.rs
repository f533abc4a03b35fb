use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_client::LoginClientError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct ClientLoginRequestDto {
    /// Email address
    #[schema(example = "applicant@example.com")]
    pub email: String,

    /// Password
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct ClientLoginResponse {
    /// JWT access token (short-lived)
    access_token: String,

    /// JWT refresh token (long-lived)
    refresh_token: String,

    /// Client account id
    client_id: String,

    /// The one profile this account owns
    profile_id: String,

    /// Email address
    email: String,
}

/// Client login
///
/// Authenticates an applicant account. The issued tokens are bound to the
/// single profile the account owns.
#[utoipa::path(
    post,
    path = "/api/auth/client/login",
    tag = "auth",
    request_body = ClientLoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<ClientLoginResponse>)
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse
        ),
        (
            status = 403,
            description = "Account disabled",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "ACCOUNT_DISABLED",
                    "message": "This account has been disabled"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/client/login")]
pub async fn client_login_handler(
    req: web::Json<ClientLoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    if dto.email.trim().is_empty() || dto.password.trim().is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Email and password are required");
    }

    info!(email = %dto.email, "Client login attempt");

    match data
        .login_client_use_case
        .execute(dto.email.trim(), &dto.password)
        .await
    {
        Ok(result) => {
            info!(client_id = %result.client_id, profile_id = %result.profile_id, "Client logged in");
            ApiResponse::success(ClientLoginResponse {
                access_token: result.access_token,
                refresh_token: result.refresh_token,
                client_id: result.client_id.to_string(),
                profile_id: result.profile_id.to_string(),
                email: result.email,
            })
        }

        Err(LoginClientError::InvalidCredentials) => {
            warn!("Client login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginClientError::AccountDisabled) => {
            warn!("Client login failed: Account disabled");
            ApiResponse::forbidden("ACCOUNT_DISABLED", "This account has been disabled")
        }

        Err(LoginClientError::RepositoryError(ref e)) => {
            error!(error = %e, "Client login query failed");
            ApiResponse::internal_error()
        }

        Err(LoginClientError::TokenError(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::login_client::{
        ClientLoginResult, ILoginClientUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockLoginClientSuccess {
        profile_id: Uuid,
    }

    #[async_trait]
    impl ILoginClientUseCase for MockLoginClientSuccess {
        async fn execute(
            &self,
            email: &str,
            _password: &str,
        ) -> Result<ClientLoginResult, LoginClientError> {
            Ok(ClientLoginResult {
                client_id: Uuid::new_v4(),
                profile_id: self.profile_id,
                email: email.to_string(),
                access_token: "header.payload.sig".to_string(),
                refresh_token: "header.payload.sig2".to_string(),
            })
        }
    }

    struct MockLoginClientDisabled;

    #[async_trait]
    impl ILoginClientUseCase for MockLoginClientDisabled {
        async fn execute(
            &self,
            _email: &str,
            _password: &str,
        ) -> Result<ClientLoginResult, LoginClientError> {
            Err(LoginClientError::AccountDisabled)
        }
    }

    fn login_json() -> serde_json::Value {
        serde_json::json!({
            "email": "applicant@example.com",
            "password": "pw123456"
        })
    }

    #[actix_web::test]
    async fn test_client_login_success_returns_profile_binding() {
        let profile_id = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default()
            .with_login_client(MockLoginClientSuccess { profile_id })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(client_login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/client/login")
            .set_json(login_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["profile_id"], profile_id.to_string());
    }

    #[actix_web::test]
    async fn test_client_login_disabled_account() {
        let app_state = TestAppStateBuilder::default()
            .with_login_client(MockLoginClientDisabled)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(client_login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/client/login")
            .set_json(login_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ACCOUNT_DISABLED");
    }
}
