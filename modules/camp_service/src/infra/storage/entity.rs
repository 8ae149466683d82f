//! SeaORM entities for database tables
//!
//! Each entity's `before_save` hook stamps timestamps and re-runs field
//! validation, so rows written through `ActiveModelTrait` always hold the
//! data-model invariants.

use sea_orm::{ActiveValue, DbErr};

use crate::domain::validation;

/// Read the current value of an active field, if any
fn current<V>(value: &ActiveValue<V>) -> Option<&V>
where
    V: Into<sea_orm::Value>,
{
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v),
        ActiveValue::NotSet => None,
    }
}

/// Marks `DbErr::Custom` errors raised by the save hooks
pub(super) const REJECTED_PREFIX: &str = "rejected by save hook: ";

pub(super) fn rejected(error: crate::contract::CampError) -> DbErr {
    DbErr::Custom(format!("{REJECTED_PREFIX}{error}"))
}

/// Activities table
pub mod activity {
    use sea_orm::entity::prelude::*;
    use sea_orm::ActiveValue::Set;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "activities")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub difficulty: i32,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with signups
        #[sea_orm(has_many = "super::signup::Entity")]
        Signups,
    }

    impl Related<super::signup::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Signups.def()
        }
    }

    #[async_trait::async_trait]
    impl ActiveModelBehavior for ActiveModel {
        async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
        where
            C: ConnectionTrait,
        {
            let now = chrono::Utc::now();
            if insert {
                self.created_at = Set(now);
            } else {
                self.updated_at = Set(Some(now));
            }
            Ok(self)
        }
    }
}

/// Campers table
pub mod camper {
    use sea_orm::entity::prelude::*;
    use sea_orm::ActiveValue::Set;

    use super::{current, rejected, validation};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "campers")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub age: i32,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with signups
        #[sea_orm(has_many = "super::signup::Entity")]
        Signups,
    }

    impl Related<super::signup::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Signups.def()
        }
    }

    #[async_trait::async_trait]
    impl ActiveModelBehavior for ActiveModel {
        async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
        where
            C: ConnectionTrait,
        {
            if let Some(name) = current(&self.name) {
                validation::validate_camper_name(name).map_err(rejected)?;
            }
            if let Some(age) = current(&self.age) {
                validation::validate_camper_age(*age).map_err(rejected)?;
            }

            let now = chrono::Utc::now();
            if insert {
                self.created_at = Set(now);
            } else {
                self.updated_at = Set(Some(now));
            }
            Ok(self)
        }
    }
}

/// Signups table, joining campers and activities
pub mod signup {
    use sea_orm::entity::prelude::*;
    use sea_orm::ActiveValue::Set;

    use super::{current, rejected, validation};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "signups")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub time: i32,
        pub camper_id: i32,
        pub activity_id: i32,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to campers
        #[sea_orm(
            belongs_to = "super::camper::Entity",
            from = "Column::CamperId",
            to = "super::camper::Column::Id",
            on_delete = "Restrict"
        )]
        Camper,
        /// Foreign key to activities
        #[sea_orm(
            belongs_to = "super::activity::Entity",
            from = "Column::ActivityId",
            to = "super::activity::Column::Id",
            on_delete = "Restrict"
        )]
        Activity,
    }

    impl Related<super::camper::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Camper.def()
        }
    }

    impl Related<super::activity::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Activity.def()
        }
    }

    #[async_trait::async_trait]
    impl ActiveModelBehavior for ActiveModel {
        async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
        where
            C: ConnectionTrait,
        {
            if let Some(time) = current(&self.time) {
                validation::validate_signup_time(*time).map_err(rejected)?;
            }

            let now = chrono::Utc::now();
            if insert {
                self.created_at = Set(now);
            } else {
                self.updated_at = Set(Some(now));
            }
            Ok(self)
        }
    }
}
