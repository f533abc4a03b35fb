use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::admins::{
    ActiveModel as AdminActiveModel, Column as AdminColumn, Entity as AdminEntity,
    Model as AdminModel,
};
use super::sea_orm_entity::clients::{
    ActiveModel as ClientActiveModel, Column as ClientColumn, Entity as ClientEntity,
    Model as ClientModel,
};
use crate::auth::application::ports::outgoing::{
    AccountRepositoryError, AdminAccountRepository, ClientAccountRepository,
};
use crate::auth::domain::entities::{AdminAccount, ClientAccount};

#[derive(Clone)]
pub struct AccountRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_admin(model: AdminModel) -> AdminAccount {
        AdminAccount {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }

    fn map_client(model: ClientModel) -> ClientAccount {
        ClientAccount {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            profile_id: model.profile_id,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[async_trait]
impl AdminAccountRepository for AccountRepoPostgres {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminAccount>, AccountRepositoryError> {
        let account = AdminEntity::find()
            .filter(AdminColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        Ok(account.map(Self::map_admin))
    }

    async fn count(&self) -> Result<u64, AccountRepositoryError> {
        AdminEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))
    }

    async fn create(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<AdminAccount, AccountRepositoryError> {
        let active = AdminActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            created_at: Set(Utc::now().into()),
        };

        let model = active
            .insert(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_admin(model))
    }
}

#[async_trait]
impl ClientAccountRepository for AccountRepoPostgres {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<ClientAccount>, AccountRepositoryError> {
        let account = ClientEntity::find()
            .filter(ClientColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        Ok(account.map(Self::map_client))
    }

    async fn create(
        &self,
        email: &str,
        password_hash: &str,
        profile_id: Uuid,
    ) -> Result<ClientAccount, AccountRepositoryError> {
        let active = ClientActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            profile_id: Set(profile_id),
            is_active: Set(true),
            created_at: Set(Utc::now().into()),
        };

        let model = active
            .insert(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_client(model))
    }
}
