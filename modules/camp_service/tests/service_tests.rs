//! Domain service tests against in-memory mock repositories

mod common;

use camp_service::contract::*;
use camp_service::domain::repository::{
    ActivityRepository, CamperRepository, RepoError, RepoResult, SignupRepository,
};
use camp_service::domain::Service;
use common::print_test_header;
use std::sync::Arc;

// Mock repository implementations for testing
pub mod mocks {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use parking_lot::RwLock;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct Tables {
        next_id: i32,
        activities: BTreeMap<i32, Activity>,
        campers: BTreeMap<i32, Camper>,
        signups: BTreeMap<i32, Signup>,
    }

    impl Tables {
        fn next_id(&mut self) -> i32 {
            self.next_id += 1;
            self.next_id
        }
    }

    /// One shared store implementing all three repositories
    #[derive(Clone, Default)]
    pub struct MockStore {
        tables: Arc<RwLock<Tables>>,
        fail_reads: Arc<RwLock<bool>>,
    }

    impl MockStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn camper_count(&self) -> usize {
            self.tables.read().campers.len()
        }

        pub fn signup_count(&self) -> usize {
            self.tables.read().signups.len()
        }

        /// Make every list/find call fail like a lost connection
        pub fn break_storage(&self) {
            *self.fail_reads.write() = true;
        }

        fn check_storage(&self) -> RepoResult<()> {
            if *self.fail_reads.read() {
                return Err(RepoError::Other(anyhow::anyhow!("connection reset")));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ActivityRepository for MockStore {
        async fn create(&self, activity: &NewActivity) -> RepoResult<Activity> {
            let mut tables = self.tables.write();
            let id = tables.next_id();
            let created = Activity {
                id,
                name: activity.name.clone(),
                difficulty: activity.difficulty,
                created_at: Utc::now(),
                updated_at: None,
            };
            tables.activities.insert(id, created.clone());
            Ok(created)
        }

        async fn find_by_id(&self, id: i32) -> RepoResult<Option<Activity>> {
            self.check_storage()?;
            Ok(self.tables.read().activities.get(&id).cloned())
        }

        async fn list_all(&self) -> RepoResult<Vec<Activity>> {
            self.check_storage()?;
            Ok(self.tables.read().activities.values().cloned().collect())
        }

        async fn find_by_camper(&self, camper_id: i32) -> RepoResult<Vec<Activity>> {
            self.check_storage()?;
            let tables = self.tables.read();
            let mut ids: Vec<i32> = tables
                .signups
                .values()
                .filter(|s| s.camper_id == camper_id)
                .map(|s| s.activity_id)
                .collect();
            ids.sort_unstable();
            ids.dedup();
            Ok(ids
                .into_iter()
                .filter_map(|id| tables.activities.get(&id).cloned())
                .collect())
        }

        async fn delete_with_signups(&self, id: i32) -> RepoResult<bool> {
            let mut tables = self.tables.write();
            if !tables.activities.contains_key(&id) {
                return Ok(false);
            }
            tables.signups.retain(|_, s| s.activity_id != id);
            tables.activities.remove(&id);
            Ok(true)
        }
    }

    #[async_trait]
    impl CamperRepository for MockStore {
        async fn create(&self, camper: &NewCamper) -> RepoResult<Camper> {
            let mut tables = self.tables.write();
            let id = tables.next_id();
            let created = Camper {
                id,
                name: camper.name.clone(),
                age: camper.age,
                created_at: Utc::now(),
                updated_at: None,
            };
            tables.campers.insert(id, created.clone());
            Ok(created)
        }

        async fn find_by_id(&self, id: i32) -> RepoResult<Option<Camper>> {
            self.check_storage()?;
            Ok(self.tables.read().campers.get(&id).cloned())
        }

        async fn list_all(&self) -> RepoResult<Vec<Camper>> {
            self.check_storage()?;
            Ok(self.tables.read().campers.values().cloned().collect())
        }
    }

    #[async_trait]
    impl SignupRepository for MockStore {
        async fn create(&self, signup: &NewSignup) -> RepoResult<Signup> {
            let mut tables = self.tables.write();
            if !tables.campers.contains_key(&signup.camper_id) {
                return Err(RepoError::Integrity(format!(
                    "camper {} does not exist",
                    signup.camper_id
                )));
            }
            if !tables.activities.contains_key(&signup.activity_id) {
                return Err(RepoError::Integrity(format!(
                    "activity {} does not exist",
                    signup.activity_id
                )));
            }
            let id = tables.next_id();
            let created = Signup {
                id,
                time: signup.time,
                camper_id: signup.camper_id,
                activity_id: signup.activity_id,
                created_at: Utc::now(),
                updated_at: None,
            };
            tables.signups.insert(id, created.clone());
            Ok(created)
        }

        async fn list_all(&self) -> RepoResult<Vec<SignupDetail>> {
            self.check_storage()?;
            let tables = self.tables.read();
            Ok(tables
                .signups
                .values()
                .map(|s| SignupDetail {
                    signup: s.clone(),
                    camper: tables.campers.get(&s.camper_id).cloned(),
                    activity: tables.activities.get(&s.activity_id).cloned(),
                })
                .collect())
        }
    }
}

fn create_test_service() -> (Service, mocks::MockStore) {
    let store = mocks::MockStore::new();
    let repo = Arc::new(store.clone());
    let service = Service::new(repo.clone(), repo.clone(), repo);
    (service, store)
}

async fn seed_activity(service: &Service, name: &str) -> Activity {
    service
        .create_activity(NewActivity {
            name: name.to_string(),
            difficulty: 2,
        })
        .await
        .expect("Failed to create activity")
}

async fn seed_camper(service: &Service, name: &str, age: i32) -> Camper {
    service
        .create_camper(NewCamper {
            name: name.to_string(),
            age,
        })
        .await
        .expect("Failed to create camper")
}

#[tokio::test]
async fn test_create_camper_persists_valid_input() {
    let (service, store) = create_test_service();

    let camper = seed_camper(&service, "Caitlin", 8).await;

    assert_eq!(camper.name, "Caitlin");
    assert_eq!(camper.age, 8);
    assert_eq!(store.camper_count(), 1);
    assert_eq!(service.list_campers().await.unwrap(), vec![camper]);
}

#[tokio::test]
async fn test_invalid_camper_never_reaches_store() {
    let (service, store) = create_test_service();

    print_test_header(
        "test_invalid_camper_never_reaches_store",
        &["Validation runs before the write; rejected campers leave no row behind."],
    );

    for (name, age) in [("Caitlin", 7), ("Caitlin", 19), ("", 12)] {
        let result = service
            .create_camper(NewCamper {
                name: name.to_string(),
                age,
            })
            .await;
        assert!(
            matches!(result, Err(CampError::Validation { .. })),
            "{:?} accepted",
            (name, age)
        );
    }

    assert_eq!(store.camper_count(), 0);
}

#[tokio::test]
async fn test_get_camper_with_activities_deduplicates() {
    let (service, _store) = create_test_service();

    let archery = seed_activity(&service, "Archery").await;
    let swimming = seed_activity(&service, "Swimming").await;
    let camper = seed_camper(&service, "Nicholas", 12).await;

    for (activity_id, time) in [(archery.id, 9), (swimming.id, 10), (archery.id, 16)] {
        service
            .create_signup(NewSignup {
                time,
                camper_id: camper.id,
                activity_id,
            })
            .await
            .expect("Failed to create signup");
    }

    let detail = service.get_camper_with_activities(camper.id).await.unwrap();

    assert_eq!(detail.camper, camper);
    assert_eq!(detail.activities, vec![archery, swimming]);
}

#[tokio::test]
async fn test_get_missing_camper_is_not_found() {
    let (service, _store) = create_test_service();

    let result = service.get_camper_with_activities(42).await;

    assert_eq!(result, Err(CampError::not_found("Camper", 42)));
}

#[tokio::test]
async fn test_create_signup_returns_its_activity() {
    let (service, store) = create_test_service();
    let archery = seed_activity(&service, "Archery").await;
    let camper = seed_camper(&service, "Nicholas", 12).await;

    let (signup, activity) = service
        .create_signup(NewSignup {
            time: 23,
            camper_id: camper.id,
            activity_id: archery.id,
        })
        .await
        .unwrap();

    assert_eq!(signup.time, 23);
    assert_eq!(activity, archery);
    assert_eq!(store.signup_count(), 1);
}

#[tokio::test]
async fn test_signup_rejections_map_to_validation() {
    let (service, store) = create_test_service();
    let archery = seed_activity(&service, "Archery").await;
    let camper = seed_camper(&service, "Nicholas", 12).await;

    let cases = [
        // hour out of range
        NewSignup {
            time: 24,
            camper_id: camper.id,
            activity_id: archery.id,
        },
        // unknown camper
        NewSignup {
            time: 9,
            camper_id: 999,
            activity_id: archery.id,
        },
        // unknown activity
        NewSignup {
            time: 9,
            camper_id: camper.id,
            activity_id: 999,
        },
    ];

    for signup in cases {
        let result = service.create_signup(signup).await;
        assert!(
            matches!(result, Err(CampError::Validation { .. })),
            "{:?} accepted",
            signup
        );
    }

    assert_eq!(store.signup_count(), 0);
}

#[tokio::test]
async fn test_delete_activity_cascades_to_signups_only() {
    let (service, store) = create_test_service();

    print_test_header(
        "test_delete_activity_cascades_to_signups_only",
        &["Deleting an activity removes its signups and nothing else."],
    );

    let archery = seed_activity(&service, "Archery").await;
    let swimming = seed_activity(&service, "Swimming").await;
    let camper = seed_camper(&service, "Nicholas", 12).await;

    for activity_id in [archery.id, archery.id, swimming.id] {
        service
            .create_signup(NewSignup {
                time: 9,
                camper_id: camper.id,
                activity_id,
            })
            .await
            .unwrap();
    }

    service.delete_activity(archery.id).await.unwrap();

    let signups = service.list_signups().await.unwrap();
    assert_eq!(signups.len(), 1);
    assert_eq!(signups[0].signup.activity_id, swimming.id);
    assert_eq!(service.list_activities().await.unwrap(), vec![swimming]);
    assert_eq!(store.camper_count(), 1);

    let again = service.delete_activity(archery.id).await;
    assert_eq!(again, Err(CampError::not_found("Activity", archery.id)));
}

#[tokio::test]
async fn test_storage_failure_is_internal_not_not_found() {
    let (service, store) = create_test_service();
    let camper = seed_camper(&service, "Nicholas", 12).await;

    store.break_storage();

    assert_eq!(
        service.get_camper_with_activities(camper.id).await,
        Err(CampError::Internal)
    );
    assert_eq!(service.list_campers().await, Err(CampError::Internal));
}
