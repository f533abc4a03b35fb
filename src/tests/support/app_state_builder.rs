use crate::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::auth::application::use_cases::login_client::ILoginClientUseCase;
use crate::matching::application::use_cases::count_matches::ICountMatchesUseCase;
use crate::matching::application::use_cases::find_matches::IFindMatchesUseCase;
use crate::profile::application::use_cases::create_profile::ICreateProfileUseCase;
use crate::profile::application::use_cases::delete_profile::IDeleteProfileUseCase;
use crate::profile::application::use_cases::fetch_profile_by_id::IFetchProfileByIdUseCase;
use crate::profile::application::use_cases::fetch_profiles::IFetchProfilesUseCase;
use crate::profile::application::use_cases::share_profile::IShareProfileUseCase;
use crate::profile::application::use_cases::update_profile::IUpdateProfileUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    create_profile: Option<Arc<dyn ICreateProfileUseCase + Send + Sync>>,
    fetch_profiles: Option<Arc<dyn IFetchProfilesUseCase + Send + Sync>>,
    fetch_profile_by_id: Option<Arc<dyn IFetchProfileByIdUseCase + Send + Sync>>,
    update_profile: Option<Arc<dyn IUpdateProfileUseCase + Send + Sync>>,
    delete_profile: Option<Arc<dyn IDeleteProfileUseCase + Send + Sync>>,
    share_profile: Option<Arc<dyn IShareProfileUseCase + Send + Sync>>,
    find_matches: Option<Arc<dyn IFindMatchesUseCase + Send + Sync>>,
    count_matches: Option<Arc<dyn ICountMatchesUseCase + Send + Sync>>,
    login_admin: Option<Arc<dyn ILoginAdminUseCase + Send + Sync>>,
    login_client: Option<Arc<dyn ILoginClientUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create_profile: Some(Arc::new(StubCreateProfileUseCase)),
            fetch_profiles: Some(Arc::new(StubFetchProfilesUseCase)),
            fetch_profile_by_id: Some(Arc::new(StubFetchProfileByIdUseCase)),
            update_profile: Some(Arc::new(StubUpdateProfileUseCase)),
            delete_profile: Some(Arc::new(StubDeleteProfileUseCase)),
            share_profile: Some(Arc::new(StubShareProfileUseCase)),
            find_matches: Some(Arc::new(StubFindMatchesUseCase)),
            count_matches: Some(Arc::new(StubCountMatchesUseCase)),
            login_admin: Some(Arc::new(StubLoginAdminUseCase)),
            login_client: Some(Arc::new(StubLoginClientUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_profile(
        mut self,
        uc: impl ICreateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_profiles(
        mut self,
        uc: impl IFetchProfilesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profiles = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_profile_by_id(
        mut self,
        uc: impl IFetchProfileByIdUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile_by_id = Some(Arc::new(uc));
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl IUpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_profile(
        mut self,
        uc: impl IDeleteProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_share_profile(
        mut self,
        uc: impl IShareProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.share_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_find_matches(
        mut self,
        uc: impl IFindMatchesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.find_matches = Some(Arc::new(uc));
        self
    }

    pub fn with_count_matches(
        mut self,
        uc: impl ICountMatchesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.count_matches = Some(Arc::new(uc));
        self
    }

    pub fn with_login_admin(mut self, uc: impl ILoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login_admin = Some(Arc::new(uc));
        self
    }

    pub fn with_login_client(
        mut self,
        uc: impl ILoginClientUseCase + Send + Sync + 'static,
    ) -> Self {
        self.login_client = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            create_profile_use_case: self.create_profile.unwrap(),
            fetch_profiles_use_case: self.fetch_profiles.unwrap(),
            fetch_profile_by_id_use_case: self.fetch_profile_by_id.unwrap(),
            update_profile_use_case: self.update_profile.unwrap(),
            delete_profile_use_case: self.delete_profile.unwrap(),
            share_profile_use_case: self.share_profile.unwrap(),
            find_matches_use_case: self.find_matches.unwrap(),
            count_matches_use_case: self.count_matches.unwrap(),
            login_admin_use_case: self.login_admin.unwrap(),
            login_client_use_case: self.login_client.unwrap(),
        })
    }
}
