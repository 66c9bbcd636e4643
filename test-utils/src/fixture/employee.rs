use chrono::{TimeZone, Utc};

/// Returns an employee entity model with fixed values.
pub fn entity() -> entity::employee::Model {
    let created = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
    entity::employee::Model {
        id: 1,
        code: "EMP-1".to_string(),
        first_name: "Ivan".to_string(),
        name: "Petrov".to_string(),
        last_name: "Sergeevich".to_string(),
        inn: "770000000000".to_string(),
        phone: "+70000000000".to_string(),
        created_at: created,
        updated_at: created,
    }
}
