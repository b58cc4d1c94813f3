use pretty_assertions::assert_eq;
use rstest::rstest;
use saloon_core::errors::SalonError;
use saloon_core::models::salon::{OperatingHours, TimeOfDay};
use serde_json::{from_str, to_string};

#[rstest]
#[case("09:00", 9, 0)]
#[case("9:05", 9, 5)]
#[case("23:59", 23, 59)]
#[case("00:00", 0, 0)]
#[case("09:30:00", 9, 30)]
#[case("18:45:17", 18, 45)]
fn time_of_day_parses_salon_service_forms(
    #[case] raw: &str,
    #[case] hour: u8,
    #[case] minute: u8,
) {
    let time: TimeOfDay = raw.parse().expect("should parse");

    assert_eq!(time.hour(), hour);
    assert_eq!(time.minute(), minute);
}

#[rstest]
#[case("24:00")]
#[case("09:60")]
#[case("9")]
#[case("")]
#[case("ab:cd")]
#[case("09:00:00:00")]
#[case("-1:30")]
fn time_of_day_rejects_malformed_input(#[case] raw: &str) {
    let result = raw.parse::<TimeOfDay>();

    assert!(matches!(result, Err(SalonError::InvalidTimeOfDay(_))));
}

#[test]
fn time_of_day_constructor_rejects_out_of_range_values() {
    assert!(TimeOfDay::new(24, 0).is_err());
    assert!(TimeOfDay::new(0, 60).is_err());
    assert!(TimeOfDay::new(23, 59).is_ok());
}

#[test]
fn time_of_day_displays_zero_padded() {
    let time = TimeOfDay::new(9, 5).expect("valid time");

    assert_eq!(time.to_string(), "09:05");
}

#[test]
fn time_of_day_orders_chronologically() {
    let earlier: TimeOfDay = "09:00".parse().expect("time");
    let later: TimeOfDay = "10:30".parse().expect("time");

    assert!(earlier < later);
}

#[test]
fn time_of_day_serializes_as_its_string_form() {
    let time: TimeOfDay = "08:30".parse().expect("time");

    let json = to_string(&time).expect("Failed to serialize time of day");
    assert_eq!(json, "\"08:30\"");

    let deserialized: TimeOfDay = from_str(&json).expect("Failed to deserialize time of day");
    assert_eq!(deserialized, time);
}

#[test]
fn time_of_day_deserialization_rejects_invalid_strings() {
    assert!(from_str::<TimeOfDay>("\"25:00\"").is_err());
}

#[test]
fn operating_hours_round_trip() {
    let hours = OperatingHours::new(
        "09:00".parse().expect("opening"),
        "18:00".parse().expect("closing"),
    );

    let json = to_string(&hours).expect("Failed to serialize operating hours");
    let deserialized: OperatingHours = from_str(&json).expect("Failed to deserialize operating hours");

    assert_eq!(deserialized, hours);
}
