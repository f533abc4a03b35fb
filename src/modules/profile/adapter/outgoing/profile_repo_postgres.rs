use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{
    gender_to_db, status_to_db, ActiveModel as ProfileActiveModel, Column as ProfileColumn,
    Entity as ProfileEntity, Model as ProfileModel,
};
use crate::profile::application::ports::outgoing::{
    CreateProfileData, ProfileFilter, ProfilePatch, ProfileRepository, ProfileRepositoryError,
};
use crate::profile::domain::entities::Profile;

#[derive(Clone)]
pub struct ProfileRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Connection-level failures drive failover; query-level failures do not.
fn map_db_err(err: DbErr) -> ProfileRepositoryError {
    match err {
        DbErr::Conn(e) => ProfileRepositoryError::Unavailable(e.to_string()),
        DbErr::ConnectionAcquire(e) => ProfileRepositoryError::Unavailable(e.to_string()),
        other => ProfileRepositoryError::DatabaseError(other.to_string()),
    }
}

fn to_domain(model: ProfileModel) -> Result<Profile, ProfileRepositoryError> {
    model.to_domain().map_err(ProfileRepositoryError::DatabaseError)
}

#[async_trait]
impl ProfileRepository for ProfileRepoPostgres {
    async fn find(&self, filter: ProfileFilter) -> Result<Vec<Profile>, ProfileRepositoryError> {
        let mut query = ProfileEntity::find().order_by_asc(ProfileColumn::CreatedAt);

        if let Some(gender) = filter.gender {
            query = query.filter(ProfileColumn::Gender.eq(gender_to_db(gender)));
        }
        if let Some(status) = filter.status {
            query = query.filter(ProfileColumn::Status.eq(status_to_db(status)));
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;

        models.into_iter().map(to_domain).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, ProfileRepositoryError> {
        let model = ProfileEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model.map(to_domain).transpose()
    }

    async fn create(&self, data: CreateProfileData) -> Result<Profile, ProfileRepositoryError> {
        let model = ProfileModel::from_create_data(&data);
        let active: ProfileActiveModel = model.into();

        let inserted = ProfileEntity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_domain(inserted)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: ProfilePatch,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        let existing = ProfileEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: ProfileActiveModel = existing.into();

        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(age) = patch.age {
            active.age = Set(age);
        }
        if let Some(height) = patch.height {
            active.height = Set(height);
        }
        if let Some(education) = patch.education {
            active.education = Set(education);
        }
        if let Some(occupation) = patch.occupation {
            active.occupation = Set(occupation);
        }
        if let Some(address) = patch.address {
            active.address = Set(address);
        }
        if let Some(city) = patch.city {
            active.city = Set(city);
        }
        if let Some(country) = patch.country {
            active.country = Set(country);
        }
        if let Some(family_details) = patch.family_details {
            active.family_details = Set(family_details);
        }
        if let Some(status) = patch.status {
            active.status = Set(status_to_db(status).to_string());
        }
        if let Some(matched_with) = patch.matched_with {
            match matched_with {
                Some(partner) => {
                    active.matched_with = Set(Some(partner));
                    active.matched_on = Set(Some(chrono::Utc::now().into()));
                }
                None => {
                    active.matched_with = Set(None);
                    active.matched_on = Set(None);
                }
            }
        }
        if let Some(requirements) = patch.requirements {
            active.requirements = Set(serde_json::to_value(&requirements)
                .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(Some(to_domain(updated)?))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ProfileRepositoryError> {
        let result = ProfileEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn increment_share_count(&self, id: Uuid) -> Result<i32, ProfileRepositoryError> {
        let existing = ProfileEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProfileRepositoryError::NotFound)?;

        let next = existing.share_count + 1;
        let mut active: ProfileActiveModel = existing.into();
        active.share_count = Set(next);
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.share_count)
    }
}
