use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::admin_login::{
    AdminLoginRequestDto, AdminLoginResponse,
};
use crate::auth::adapter::incoming::web::routes::client_login::{
    ClientLoginRequestDto, ClientLoginResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RishtaDesk API",
        version = "1.0.0",
        description = "API documentation for the RishtaDesk matchmaking service",
        contact(
            name = "API Support",
            email = "support@rishtadesk.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::admin_login::admin_login_handler,
        crate::auth::adapter::incoming::web::routes::client_login::client_login_handler,

        // Profile endpoints
        // create_profile_handler,
        // get_profiles_handler,
        // get_single_profile_handler,
        // update_profile_handler,
        // delete_profile_handler,
        // share_profile_handler,

        // Matching endpoints
        // get_matches_handler,
        // get_match_counts_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<AdminLoginResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            AdminLoginRequestDto,
            AdminLoginResponse,
            ClientLoginRequestDto,
            ClientLoginResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "profiles", description = "Profile intake and administration endpoints"),
        (name = "matching", description = "Compatibility matching endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
