use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::profile::application::ports::outgoing::{ProfileFilter, Provenance};
use crate::profile::application::use_cases::fetch_profiles::FetchProfilesError;
use crate::profile::domain::entities::{Gender, Profile, ProfileStatus};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ProfileListQuery {
    pub gender: Option<Gender>,
    pub status: Option<ProfileStatus>,
}

#[derive(Serialize)]
pub struct ProfileListResponse {
    pub profiles: Vec<Profile>,
    pub provenance: Provenance,
}

#[get("/api/profiles")]
pub async fn get_profiles_handler(
    _admin: AdminSession,
    query: web::Query<ProfileListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = ProfileFilter {
        gender: query.gender,
        status: query.status,
    };

    match data.fetch_profiles_use_case.execute(filter).await {
        Ok((profiles, provenance)) => ApiResponse::success(ProfileListResponse {
            profiles,
            provenance,
        }),

        Err(FetchProfilesError::RepositoryError(ref e)) => {
            error!(error = %e, "Profile listing failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::auth::domain::entities::Role;
    use crate::profile::application::use_cases::fetch_profiles::IFetchProfilesUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::create_test_jwt_service;
    use crate::tests::support::fixtures::{female_profile, male_profile};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;
    use uuid::Uuid;

    struct MockFetchProfiles {
        provenance: Provenance,
        forwarded_filter: std::sync::Mutex<Option<ProfileFilter>>,
    }

    impl MockFetchProfiles {
        fn primary() -> Self {
            Self {
                provenance: Provenance::Primary,
                forwarded_filter: std::sync::Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl IFetchProfilesUseCase for Arc<MockFetchProfiles> {
        async fn execute(
            &self,
            filter: ProfileFilter,
        ) -> Result<(Vec<Profile>, Provenance), FetchProfilesError> {
            *self.forwarded_filter.lock().unwrap() = Some(filter);
            Ok((vec![male_profile(), female_profile()], self.provenance))
        }
    }

    fn token_service_data() -> web::Data<Arc<dyn TokenProvider>> {
        web::Data::new(Arc::new(create_test_jwt_service()) as Arc<dyn TokenProvider>)
    }

    fn admin_token() -> String {
        create_test_jwt_service()
            .generate_access_token(Uuid::new_v4(), Role::Admin, None)
            .unwrap()
    }

    #[actix_web::test]
    async fn test_get_profiles_returns_tagged_list() {
        let mock = Arc::new(MockFetchProfiles::primary());
        let app_state = TestAppStateBuilder::default()
            .with_fetch_profiles(mock.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_service_data())
                .service(get_profiles_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/profiles?gender=male&status=active")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["provenance"], "primary");
        assert_eq!(body["data"]["profiles"].as_array().unwrap().len(), 2);

        let forwarded = (*mock.forwarded_filter.lock().unwrap()).unwrap();
        assert_eq!(forwarded.gender, Some(Gender::Male));
        assert_eq!(forwarded.status, Some(ProfileStatus::Active));
    }

    #[actix_web::test]
    async fn test_get_profiles_requires_admin() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_service_data())
                .service(get_profiles_handler),
        )
        .await;

        let client_token = create_test_jwt_service()
            .generate_access_token(Uuid::new_v4(), Role::Client, Some(Uuid::new_v4()))
            .unwrap();

        let req = test::TestRequest::get()
            .uri("/api/profiles")
            .insert_header(("Authorization", format!("Bearer {client_token}")))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn test_get_profiles_requires_token() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_service_data())
                .service(get_profiles_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/profiles").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
