use osrsdiff::core::format_duration;

#[test]
fn test_negative_is_not_available() {
    assert_eq!(format_duration(-1.0), "N/A");
    assert_eq!(format_duration(-0.001), "N/A");
    assert_eq!(format_duration(f64::NAN), "N/A");
    assert_eq!(format_duration(f64::INFINITY), "N/A");
}

#[test]
fn test_less_than_a_day() {
    assert_eq!(format_duration(0.5), "12 hours");
    assert_eq!(format_duration(0.05), "1 hour");
    assert_eq!(format_duration(0.01), "14 minutes");
    assert_eq!(format_duration(0.0), "0 minutes");
}

#[test]
fn test_days() {
    assert_eq!(format_duration(1.0), "1 day");
    assert_eq!(format_duration(1.9), "1 day");
    assert_eq!(format_duration(2.0), "2 days");
    assert_eq!(format_duration(6.99), "6 days");
}

#[test]
fn test_weeks() {
    assert_eq!(format_duration(7.0), "1 week");
    assert_eq!(format_duration(8.0), "1 week, 1 day");
    assert_eq!(format_duration(10.0), "1 week, 3 days");
    assert_eq!(format_duration(14.0), "2 weeks");
    assert_eq!(format_duration(29.5), "4 weeks, 1 day");
}

#[test]
fn test_months() {
    assert_eq!(format_duration(30.0), "1 month");
    assert_eq!(format_duration(31.0), "1 month, 1 day");
    assert_eq!(format_duration(45.0), "1 month, 15 days");
    assert_eq!(format_duration(364.0), "12 months, 4 days");
}

#[test]
fn test_years() {
    assert_eq!(format_duration(365.0), "1 year");
    assert_eq!(format_duration(400.0), "1 year, 1 month");
    assert_eq!(format_duration(730.0), "2 years");
    assert_eq!(format_duration(12_933.098), "35 years, 5 months");
}
