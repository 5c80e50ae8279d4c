use chrono::{Datelike, Local, TimeZone, Timelike};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use text_logger::clock::split_epoch;
use text_logger::{CalendarTime, CalendarZone, LocalZone, TimeConversionError, UtcZone};

#[test]
fn test_split_epoch_after_epoch() {
    let t = UNIX_EPOCH + Duration::from_secs(1_709_626_150) + Duration::from_micros(7_999);
    assert_eq!(split_epoch(t), (1_709_626_150, 7), "Millis should truncate, not round");
}

#[test]
fn test_split_epoch_at_epoch() {
    assert_eq!(split_epoch(UNIX_EPOCH), (0, 0));
}

#[test]
fn test_split_epoch_before_epoch() {
    let one_milli_before = UNIX_EPOCH - Duration::from_millis(1);
    assert_eq!(split_epoch(one_milli_before), (-1, 999), "Seconds should floor toward the past");

    let exactly_two_before = UNIX_EPOCH - Duration::from_secs(2);
    assert_eq!(split_epoch(exactly_two_before), (-2, 0));

    let mid_second = UNIX_EPOCH - Duration::from_millis(1_250);
    assert_eq!(split_epoch(mid_second), (-2, 750));
}

#[test]
fn test_split_epoch_millis_range() {
    let mut t = UNIX_EPOCH + Duration::from_secs(1_000);
    for _ in 0..2_500 {
        let (_, millis) = split_epoch(t);
        assert!(millis < 1000, "Millis must stay below 1000, got {}", millis);
        t += Duration::from_micros(997);
    }
}

#[test]
fn test_utc_calendar() {
    let tm = UtcZone::to_calendar(1_709_626_150).unwrap();
    assert_eq!(
        tm,
        CalendarTime { year: 2024, month: 3, day: 5, hour: 8, minute: 9, second: 10 }
    );
}

#[test]
fn test_utc_calendar_at_epoch() {
    let tm = UtcZone::to_calendar(0).unwrap();
    assert_eq!(
        tm,
        CalendarTime { year: 1970, month: 1, day: 1, hour: 0, minute: 0, second: 0 }
    );
}

#[test]
fn test_local_calendar_matches_chrono() {
    let secs = 1_709_626_150;
    let expected = Local.timestamp_opt(secs, 0).single().unwrap();
    let tm = LocalZone::to_calendar(secs).unwrap();

    assert_eq!(tm.year, expected.year());
    assert_eq!(tm.month, expected.month());
    assert_eq!(tm.day, expected.day());
    assert_eq!(tm.hour, expected.hour());
    assert_eq!(tm.minute, expected.minute());
    assert_eq!(tm.second, expected.second());
}

#[test]
fn test_out_of_range_conversion() {
    let far = i64::MAX / 2;
    assert_eq!(UtcZone::to_calendar(far), Err(TimeConversionError::OutOfRange(far)));
    assert_eq!(LocalZone::to_calendar(far), Err(TimeConversionError::OutOfRange(far)));
}

#[test]
fn test_zero_sentinel() {
    assert_eq!(CalendarTime::ZERO, CalendarTime::default());
}

#[test]
fn test_split_epoch_across_threads() {
    let handle = thread::spawn(|| split_epoch(SystemTime::now()));
    let (main_secs, _) = split_epoch(SystemTime::now());
    let (thread_secs, _) = handle.join().unwrap();

    assert!((main_secs - thread_secs).abs() <= 1, "Both threads should see the same clock");
}
