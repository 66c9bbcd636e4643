use chrono::{NaiveDate, TimeZone, Utc};

/// Returns an order entity model with fixed values.
pub fn entity() -> entity::order::Model {
    let created = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
    entity::order::Model {
        id: 1,
        order_uid: 5001,
        unicum_num: 12,
        order_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        order_sum: 1250.5,
        driver: "Driver".to_string(),
        agent: "Agent".to_string(),
        brieforg: "ORG".to_string(),
        client_id: 42,
        client_name: "Client".to_string(),
        client_address: "Main st. 1".to_string(),
        vid_doc: "invoice".to_string(),
        start_at: None,
        finish_at: None,
        done: false,
        status: 0,
        user_id: None,
        collector_id: Some(3),
        created_at: created,
        updated_at: created,
    }
}
