//! Sample data for a fresh database

use camp_service::{domain::Service, NewActivity, NewCamper, NewSignup};

const ACTIVITIES: &[(&str, i32)] = &[
    ("Archery", 2),
    ("Swimming", 3),
    ("Hiking", 4),
    ("Canoeing", 5),
];

const CAMPERS: &[(&str, i32)] = &[
    ("Caitlin", 8),
    ("Nicholas", 12),
    ("Ramona", 15),
];

/// Insert sample activities, campers and signups through the domain service
pub async fn run(service: &Service) -> anyhow::Result<()> {
    let mut activity_ids = Vec::with_capacity(ACTIVITIES.len());
    for (name, difficulty) in ACTIVITIES {
        let activity = service
            .create_activity(NewActivity {
                name: (*name).to_string(),
                difficulty: *difficulty,
            })
            .await?;
        activity_ids.push(activity.id);
    }

    let mut camper_ids = Vec::with_capacity(CAMPERS.len());
    for (name, age) in CAMPERS {
        let camper = service
            .create_camper(NewCamper {
                name: (*name).to_string(),
                age: *age,
            })
            .await?;
        camper_ids.push(camper.id);
    }

    // Each camper takes two activities at staggered hours.
    let mut signups = 0;
    for (i, camper_id) in camper_ids.iter().enumerate() {
        for offset in 0..2 {
            let activity_id = activity_ids[(i + offset) % activity_ids.len()];
            service
                .create_signup(NewSignup {
                    time: 9 + (i * 2 + offset) as i32,
                    camper_id: *camper_id,
                    activity_id,
                })
                .await?;
            signups += 1;
        }
    }

    tracing::info!(
        activities = activity_ids.len(),
        campers = camper_ids.len(),
        signups,
        "database seeded"
    );
    Ok(())
}
