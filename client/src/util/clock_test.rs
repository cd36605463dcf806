use super::*;

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000.0);
}

#[test]
fn utc_time_label_formats_time_of_day() {
    assert_eq!(utc_time_label(0.0), "00:00:00");
    // 2023-11-14T22:13:20Z
    assert_eq!(utc_time_label(1_700_000_000_000.0), "22:13:20");
}

#[test]
fn utc_time_label_ignores_sub_second_part() {
    assert_eq!(utc_time_label(61_999.0), "00:01:01");
}

#[test]
fn utc_time_label_wraps_negative_times() {
    assert_eq!(utc_time_label(-1_000.0), "23:59:59");
}
