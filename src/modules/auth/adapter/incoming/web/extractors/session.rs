use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::domain::entities::Role;
use crate::shared::api::ApiResponse;

/// Any authenticated caller, admin or client.
#[derive(Debug, Clone)]
pub struct Session {
    pub account_id: Uuid,
    pub role: Role,
    pub profile_id: Option<Uuid>,
}

impl Session {
    /// Clients may only act on their own profile; admins on any.
    pub fn can_access_profile(&self, profile_id: Uuid) -> bool {
        match self.role {
            Role::Admin => true,
            Role::Client => self.profile_id == Some(profile_id),
        }
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

impl FromRequest for Session {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_service = match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider>>>() {
            Some(service) => service,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_service.verify_token(&token) {
            Ok(claims) => {
                if claims.token_type != "access" {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN_TYPE",
                        "Invalid token type",
                    ))));
                }

                ready(Ok(Session {
                    account_id: claims.sub,
                    role: claims.role,
                    profile_id: claims.profile_id,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

/// An authenticated admin. Rejects client tokens with 403.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub admin_id: Uuid,
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let session_future = Session::from_request(req, payload);

        match session_future.into_inner() {
            Ok(session) => {
                if session.role != Role::Admin {
                    return ready(Err(create_api_error(ApiResponse::forbidden(
                        "ADMIN_REQUIRED",
                        "Administrator access required",
                    ))));
                }

                ready(Ok(AdminSession {
                    admin_id: session.account_id,
                }))
            }
            Err(e) => ready(Err(e)),
        }
    }
}
