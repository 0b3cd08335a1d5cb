use chrono::{TimeZone, Utc};
use qtty::Days;
use walltime::{Date, DateTime, Duration, Error, Time};

#[test]
fn epoch_plus_a_year_lands_on_new_year_1971() {
    let later = DateTime::UNIX_EPOCH + Duration::from_days(365);
    assert_eq!(later, DateTime::from_ymdhmsn(1971, 1, 1, 0, 0, 0, 0).unwrap());
    assert_eq!(later.to_string(), "1971-01-01T00:00:00");
}

#[test]
fn offset_sign_convention_normalizes_toward_utc() {
    let plus = Time::from_iso_str("12:00:00+01:00").unwrap();
    let minus = Time::from_iso_str("12:00:00-01:00").unwrap();
    assert_eq!(plus, Time::from_iso_str("11:00:00Z").unwrap());
    assert_eq!(minus, Time::from_iso_str("13:00:00Z").unwrap());
}

#[test]
fn minimal_fraction_formatting() {
    let five = Time::from_hmsn(0, 0, 0, 5).unwrap();
    let half = Time::from_hmsn(0, 0, 0, 500_000_000).unwrap();
    assert_eq!(five.to_iso_string(), "00:00:00,000000005");
    assert_eq!(half.to_iso_string(), "00:00:00,5");
    assert_eq!(Time::MIDNIGHT.to_iso_string(), "00:00:00");
}

#[test]
fn end_of_day_midnight() {
    let t = Time::from_iso_str("24:00:00").unwrap();
    assert_eq!(
        (t.hour(), t.minute(), t.second(), t.nanosecond()),
        (24, 0, 0, 0)
    );
    assert_eq!(Time::from_iso_str("24:00:01"), Err(Error::InvalidTimeFormat));
    assert_eq!(Time::from_iso_str("24:01:00"), Err(Error::InvalidTimeFormat));
}

#[test]
fn negative_nanos_keep_sub_hour_fields_canonical() {
    let t = Time::from_nanos_since_midnight(-123);
    assert_eq!(
        (t.hour(), t.minute(), t.second(), t.nanosecond()),
        (-1, 59, 59, 999_999_877)
    );
    assert_eq!(t.normalize().to_iso_string(), "23:59:59,999999877");
}

#[test]
fn malformed_inputs_never_panic() {
    for s in [
        "12:00:00\u{2014}",
        "12:00:00+01:00Z",
        "12:00:00+15:00",
        "12::00",
        "+12:00",
        "12:00:00.",
    ] {
        assert_eq!(Time::from_iso_str(s), Err(Error::InvalidTimeFormat), "{s:?}");
        let full = format!("2024-01-01T{s}");
        assert_eq!(
            DateTime::from_iso_str(&full),
            Err(Error::InvalidDateTimeFormat),
            "{full:?}"
        );
    }
}

#[test]
fn datetime_string_roundtrip_through_chrono() {
    let chrono_dt = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap();
    let value = DateTime::from_utc(chrono_dt);
    let text = value.to_string();
    assert_eq!(text, "2024-02-29T23:59:59");
    let parsed: DateTime = text.parse().unwrap();
    assert_eq!(parsed.to_utc(), Some(chrono_dt));
}

#[test]
fn durations_bridge_to_qtty_days() {
    let week = Duration::try_from_days(Days::new(7.0)).unwrap();
    let start = DateTime::new(Date::from_ymd(2024, 12, 28).unwrap(), Time::MIDNIGHT);
    assert_eq!((start + week).date(), Date::from_ymd(2025, 1, 4).unwrap());
    assert!((week.to_days() - Days::new(7.0)).abs() < Days::new(1e-12));
}

#[cfg(feature = "serde")]
#[test]
fn serde_datetime_is_an_iso_string() {
    let value = DateTime::from_iso_str("2024-03-01T12:00:00,25").unwrap();
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, "\"2024-03-01T12:00:00,25\"");
    let back: DateTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}
