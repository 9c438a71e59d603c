use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use hospico_core::{
    availability::{booked_times, is_available, merge, time_of_day, BookedTimes},
    models::{appointment::AppointmentRecord, time_slot::TimeSlot},
    schedule::generate_slot_times,
};

fn record(time: &str, status: &str) -> AppointmentRecord {
    AppointmentRecord {
        appointment_time: Some(time.to_string()),
        status: status.to_string(),
        ..Default::default()
    }
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

#[rstest]
#[case("2025-01-06T09:00", Some("09:00"))]
#[case("2025-01-06T14:30:00", Some("14:30"))]
#[case("2025-01-06T14:30:00.000Z", Some("14:30"))]
#[case("2025-01-06T14:3", None)]
#[case("2025-01-06", None)]
#[case("", None)]
fn test_time_of_day(#[case] timestamp: &str, #[case] expected: Option<&str>) {
    assert_eq!(time_of_day(timestamp), expected);
}

#[test]
fn test_only_booked_status_is_collected() {
    let records = vec![
        record("2025-01-06T09:00:00", "BOOKED"),
        record("2025-01-06T10:00:00", "CANCELLED"),
        record("2025-01-06T11:00:00", "COMPLETED"),
        record("2025-01-06T11:30:00", "booked"),
        record("2025-01-06T14:30:00", "BOOKED"),
    ];

    let booked = booked_times(&records);

    let expected: BookedTimes = ["09:00", "14:30"].into_iter().map(String::from).collect();
    assert_eq!(booked, expected);
}

#[test]
fn test_malformed_timestamps_are_dropped() {
    let mut missing = record("", "BOOKED");
    missing.appointment_time = None;
    let records = vec![missing, record("09:00", "BOOKED"), record("2025-01-06T12:00", "BOOKED")];

    let booked = booked_times(&records);

    assert_eq!(booked.len(), 1);
    assert!(booked.contains("12:00"));
}

#[test]
fn test_scenario_booked_times_on_monday() {
    let booked: BookedTimes = ["09:00", "14:30"].into_iter().map(String::from).collect();
    let slots = merge(&generate_slot_times(monday(), None), &booked);

    assert_eq!(slots.len(), 21);
    let taken: Vec<&str> = slots
        .iter()
        .filter(|slot| slot.is_booked)
        .map(|slot| slot.time.as_str())
        .collect();
    assert_eq!(taken, vec!["09:00", "14:30"]);
    assert_eq!(slots.iter().filter(|slot| !slot.is_booked).count(), 19);
}

#[test]
fn test_cancelled_appointment_leaves_slot_free() {
    let records = vec![record("2025-01-06T10:00:00", "CANCELLED")];
    let slots = merge(&generate_slot_times(monday(), None), &booked_times(&records));

    let ten = slots.iter().find(|slot| slot.time == "10:00").unwrap();
    assert!(!ten.is_booked);
}

#[test]
fn test_sunday_booking_at_closing_matches_nothing() {
    let sunday = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
    let booked: BookedTimes = ["18:00".to_string()].into();

    let slots = merge(&generate_slot_times(sunday, None), &booked);

    assert_eq!(slots.len(), 17);
    assert!(slots.iter().all(|slot| !slot.is_booked));
}

#[test]
fn test_merge_preserves_order() {
    let times = vec!["09:00".to_string(), "09:30".to_string(), "10:00".to_string()];
    let booked: BookedTimes = ["09:30".to_string()].into();

    let slots = merge(&times, &booked);

    assert_eq!(
        slots,
        vec![TimeSlot::free("09:00"), TimeSlot::booked("09:30"), TimeSlot::free("10:00")]
    );
}

#[test]
fn test_membership_is_exact() {
    let times = vec!["09:00".to_string()];
    let booked: BookedTimes = ["9:00".to_string(), "09:00 ".to_string()].into();

    assert!(!merge(&times, &booked)[0].is_booked);
}

#[test]
fn test_is_available() {
    let slots = vec![TimeSlot::free("09:00"), TimeSlot::booked("09:30")];

    assert!(is_available(&slots, "09:00"));
    assert!(!is_available(&slots, "09:30"));
    assert!(!is_available(&slots, "10:00"));
}
