//! SeaORM repository implementations

use crate::contract::{
    Activity, Camper, NewActivity, NewCamper, NewSignup, Signup, SignupDetail,
};
use crate::domain::repository::{
    ActivityRepository, CamperRepository, RepoError, RepoResult, SignupRepository,
};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use super::entity::{activity, camper, signup};

// ===== Activity Repository =====

pub struct SeaOrmActivityRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmActivityRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActivityRepository for SeaOrmActivityRepository {
    async fn create(&self, new_activity: &NewActivity) -> RepoResult<Activity> {
        let active_model: activity::ActiveModel = new_activity.into();
        let result = active_model.insert(&*self.db).await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Activity>> {
        let result = activity::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_all(&self) -> RepoResult<Vec<Activity>> {
        let results = activity::Entity::find()
            .order_by_asc(activity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn find_by_camper(&self, camper_id: i32) -> RepoResult<Vec<Activity>> {
        let results = activity::Entity::find()
            .inner_join(signup::Entity)
            .filter(signup::Column::CamperId.eq(camper_id))
            .distinct()
            .order_by_asc(activity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn delete_with_signups(&self, id: i32) -> RepoResult<bool> {
        let txn = self.db.begin().await?;

        if activity::Entity::find_by_id(id).count(&txn).await? == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        let removed = signup::Entity::delete_many()
            .filter(signup::Column::ActivityId.eq(id))
            .exec(&txn)
            .await?;

        activity::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        tracing::debug!(
            activity_id = id,
            signups_removed = removed.rows_affected,
            "activity delete committed"
        );
        Ok(true)
    }
}

// ===== Camper Repository =====

pub struct SeaOrmCamperRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCamperRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CamperRepository for SeaOrmCamperRepository {
    async fn create(&self, new_camper: &NewCamper) -> RepoResult<Camper> {
        let active_model: camper::ActiveModel = new_camper.into();
        let result = active_model.insert(&*self.db).await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Camper>> {
        let result = camper::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_all(&self) -> RepoResult<Vec<Camper>> {
        let results = camper::Entity::find()
            .order_by_asc(camper::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }
}

// ===== Signup Repository =====

pub struct SeaOrmSignupRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSignupRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SignupRepository for SeaOrmSignupRepository {
    async fn create(&self, new_signup: &NewSignup) -> RepoResult<Signup> {
        let txn = self.db.begin().await?;

        // Both references must exist when the row is inserted. A foreign key
        // violation raised by the database maps to the same Integrity error.
        if camper::Entity::find_by_id(new_signup.camper_id).count(&txn).await? == 0 {
            txn.rollback().await?;
            return Err(RepoError::Integrity(format!(
                "camper {} does not exist",
                new_signup.camper_id
            )));
        }
        if activity::Entity::find_by_id(new_signup.activity_id).count(&txn).await? == 0 {
            txn.rollback().await?;
            return Err(RepoError::Integrity(format!(
                "activity {} does not exist",
                new_signup.activity_id
            )));
        }

        let active_model: signup::ActiveModel = new_signup.into();
        let result = active_model.insert(&txn).await?;
        txn.commit().await?;

        Ok(result.into())
    }

    async fn list_all(&self) -> RepoResult<Vec<SignupDetail>> {
        let signups = signup::Entity::find()
            .order_by_asc(signup::Column::Id)
            .all(&*self.db)
            .await?;

        let camper_ids: BTreeSet<i32> = signups.iter().map(|s| s.camper_id).collect();
        let activity_ids: BTreeSet<i32> = signups.iter().map(|s| s.activity_id).collect();

        let campers: HashMap<i32, Camper> = camper::Entity::find()
            .filter(camper::Column::Id.is_in(camper_ids))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.into()))
            .collect();

        let activities: HashMap<i32, Activity> = activity::Entity::find()
            .filter(activity::Column::Id.is_in(activity_ids))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|a| (a.id, a.into()))
            .collect();

        Ok(signups
            .into_iter()
            .map(|s| SignupDetail {
                camper: campers.get(&s.camper_id).cloned(),
                activity: activities.get(&s.activity_id).cloned(),
                signup: s.into(),
            })
            .collect())
    }
}
