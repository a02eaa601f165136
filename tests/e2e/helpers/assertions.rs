use serde_json::Value;

pub fn assert_prayer_timings(timings: &Value) {
    for prayer in ["fajr", "sunrise", "dhuhr", "asr", "maghrib", "isha"] {
        assert!(
            timings.get(prayer).and_then(|v| v.as_str()).is_some(),
            "Missing '{}' time",
            prayer
        );
    }
    assert_eq!(timings.as_object().map(|o| o.len()), Some(6), "Unexpected extra timings");
}

pub fn assert_rfc3339(value: &Value) {
    let raw = value.as_str().expect("timestamp should be a string");
    assert!(
        chrono::DateTime::parse_from_rfc3339(raw).is_ok(),
        "'{}' is not RFC 3339",
        raw
    );
}

pub fn assert_string_list(value: &Value, expected_len: usize) {
    let list = value.as_array().expect("expected a list");
    assert_eq!(list.len(), expected_len);
    assert!(list.iter().all(|item| item.as_str().is_some()));
}
