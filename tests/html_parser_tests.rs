mod common;
use common::{report, roster_html, row};

use chrono::{NaiveDate, NaiveDateTime};
use crewroster::errors::AppError;
use crewroster::models::activity::Activity;
use crewroster::models::activity_type::ActivityType;
use crewroster::models::report_format::ReportFormat;
use crewroster::parser::{ActivityParser, DefaultActivityFactory, HtmlReportParser};

fn parser() -> HtmlReportParser {
    HtmlReportParser::new(DefaultActivityFactory)
}

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid datetime")
}

fn of_type(activities: &[Activity], kind: ActivityType) -> Vec<&Activity> {
    activities.iter().filter(|a| a.kind == kind).collect()
}

#[test]
fn test_roster_fixture_yields_ten_activities() {
    let activities = parser()
        .parse(&roster_html(), ReportFormat::Html)
        .expect("parse fixture");

    assert_eq!(activities.len(), 10);
    assert_eq!(of_type(&activities, ActivityType::CheckIn).len(), 3);
    assert_eq!(of_type(&activities, ActivityType::CheckOut).len(), 2);
    assert_eq!(of_type(&activities, ActivityType::Flight).len(), 2);
    assert_eq!(of_type(&activities, ActivityType::DayOff).len(), 1);
    assert_eq!(of_type(&activities, ActivityType::StandBy).len(), 1);
    assert_eq!(of_type(&activities, ActivityType::Unknown).len(), 1);
}

#[test]
fn test_roster_fixture_flights() {
    let activities = parser().parse(&roster_html(), ReportFormat::Html).unwrap();
    let flights = of_type(&activities, ActivityType::Flight);

    assert_eq!(flights[0].location.code(), "KRP");
    assert_eq!(flights[0].to.as_ref().unwrap().code(), "CPH");
    assert_eq!(flights[0].occurred_at, dt("2022-01-10 00:00:00"));
    assert_eq!(flights[0].scheduled_time_departure, Some(dt("2022-01-10 08:45:00")));
    assert_eq!(flights[0].scheduled_time_arrival, Some(dt("2022-01-10 09:35:00")));

    // continuation row: no date label, same day
    assert_eq!(flights[1].location.code(), "CPH");
    assert_eq!(flights[1].to.as_ref().unwrap().code(), "KRP");
    assert_eq!(flights[1].occurred_at, dt("2022-01-10 00:00:00"));
    assert_eq!(flights[1].scheduled_time_departure, Some(dt("2022-01-10 16:45:00")));
    assert_eq!(flights[1].scheduled_time_arrival, Some(dt("2022-01-10 17:35:00")));
}

#[test]
fn test_roster_fixture_check_in_and_out() {
    let activities = parser().parse(&roster_html(), ReportFormat::Html).unwrap();

    let check_ins: Vec<(&str, NaiveDateTime)> = of_type(&activities, ActivityType::CheckIn)
        .iter()
        .map(|a| (a.location.code(), a.occurred_at))
        .collect();
    assert_eq!(
        check_ins,
        vec![
            ("CPH", dt("2022-01-10 07:45:00")),
            ("KRP", dt("2022-01-15 05:00:00")),
            ("EBJ", dt("2022-01-22 05:55:00")),
        ]
    );

    let check_outs: Vec<(&str, NaiveDateTime)> = of_type(&activities, ActivityType::CheckOut)
        .iter()
        .map(|a| (a.location.code(), a.occurred_at))
        .collect();
    assert_eq!(
        check_outs,
        vec![
            ("CPH", dt("2022-01-10 17:55:00")),
            ("KRP", dt("2022-01-15 17:00:00")),
        ]
    );
}

#[test]
fn test_roster_fixture_day_off_stand_by_unknown() {
    let activities = parser().parse(&roster_html(), ReportFormat::Html).unwrap();

    let day_off = of_type(&activities, ActivityType::DayOff)[0];
    assert_eq!(day_off.location.code(), "KRP");
    assert_eq!(day_off.occurred_at, dt("2022-01-12 00:00:00"));

    let stand_by = of_type(&activities, ActivityType::StandBy)[0];
    assert_eq!(stand_by.location.code(), "KRP");
    assert_eq!(stand_by.occurred_at, dt("2022-01-15 00:00:00"));

    let unknown = of_type(&activities, ActivityType::Unknown)[0];
    assert_eq!(unknown.location.code(), "KRP");
    assert_eq!(unknown.occurred_at, dt("2022-01-22 00:00:00"));
}

#[test]
fn test_roster_fixture_document_order() {
    let activities = parser().parse(&roster_html(), ReportFormat::Html).unwrap();
    let kinds: Vec<ActivityType> = activities.iter().map(|a| a.kind).collect();

    assert_eq!(
        kinds,
        vec![
            ActivityType::CheckIn,
            ActivityType::Flight,
            ActivityType::CheckOut,
            ActivityType::Flight,
            ActivityType::DayOff,
            ActivityType::CheckIn,
            ActivityType::CheckOut,
            ActivityType::StandBy,
            ActivityType::CheckIn,
            ActivityType::Unknown,
        ]
    );
}

#[test]
fn test_flight_fields_only_on_flights() {
    let activities = parser().parse(&roster_html(), ReportFormat::Html).unwrap();

    for a in &activities {
        assert!(a.is_consistent(), "inconsistent activity: {a:?}");
        assert!(a.id.is_none());
    }
}

#[test]
fn test_parse_is_deterministic() {
    let html = roster_html();
    let first = parser().parse(&html, ReportFormat::Html).unwrap();
    let second = parser().parse(&html, ReportFormat::Html).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_input_yields_nothing() {
    let activities = parser().parse("", ReportFormat::Html).unwrap();
    assert!(activities.is_empty());
}

#[test]
fn test_unsupported_format_is_rejected_before_parsing() {
    // even a valid document is not looked at
    let err = parser().parse(&roster_html(), ReportFormat::Json).unwrap_err();
    assert!(matches!(
        err,
        AppError::UnsupportedFormat {
            expected: ReportFormat::Html,
            got: ReportFormat::Json
        }
    ));
    assert_eq!(err.to_string(), "Expected format html, got json");

    let err = parser().parse("", ReportFormat::Json).unwrap_err();
    assert!(matches!(err, AppError::UnsupportedFormat { .. }));
}

#[test]
fn test_supports_only_html() {
    assert!(parser().supports(ReportFormat::Html));
    assert!(!parser().supports(ReportFormat::Json));
}

#[test]
fn test_rows_inherit_day_until_next_label() {
    let html = report(
        "10Jan22",
        &[
            row("Mon 10", "", "", "OFF", "KRP", "", "KRP", ""),
            row("", "", "", "SBY", "KRP", "", "KRP", ""),
            row("Thu 13", "", "", "OFF", "KRP", "", "KRP", ""),
            row("", "", "", "XYZ", "KRP", "", "KRP", ""),
            row("", "", "", "XYZ", "CPH", "", "KRP", ""),
        ],
    );

    let activities = parser().parse(&html, ReportFormat::Html).unwrap();
    let days: Vec<NaiveDate> = activities.iter().map(|a| a.occurred_at.date()).collect();

    let d = |day| NaiveDate::from_ymd_opt(2022, 1, day).unwrap();
    assert_eq!(days, vec![d(10), d(10), d(13), d(13), d(13)]);
}

#[test]
fn test_rows_before_first_label_use_anchor_day() {
    let html = report("10Jan22", &[row("", "", "", "OFF", "KRP", "", "KRP", "")]);
    let activities = parser().parse(&html, ReportFormat::Html).unwrap();
    assert_eq!(activities[0].occurred_at, dt("2022-01-10 00:00:00"));
}

#[test]
fn test_blank_check_in_suppresses_only_check_in() {
    let html = report(
        "10Jan22",
        &[
            row("Mon 10", "", "", "DX77", "KRP", "0845", "CPH", "0935"),
            row("", "0600", "", "DX78", "CPH", "0845", "KRP", "0935"),
        ],
    );

    let activities = parser().parse(&html, ReportFormat::Html).unwrap();
    let kinds: Vec<ActivityType> = activities.iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        vec![ActivityType::Flight, ActivityType::CheckIn, ActivityType::Flight]
    );
}

#[test]
fn test_check_in_reads_to_station_check_out_reads_from_station() {
    let html = report(
        "10Jan22",
        &[row("Mon 10", "0500", "1700", "SBY", "AAA", "", "BBB", "")],
    );

    let activities = parser().parse(&html, ReportFormat::Html).unwrap();
    assert_eq!(activities.len(), 3);
    assert_eq!(activities[0].kind, ActivityType::CheckIn);
    assert_eq!(activities[0].location.code(), "BBB");
    assert_eq!(activities[1].kind, ActivityType::CheckOut);
    assert_eq!(activities[1].location.code(), "AAA");
    assert_eq!(activities[2].kind, ActivityType::StandBy);
    assert_eq!(activities[2].location.code(), "AAA");
}

#[test]
fn test_time_suffix_is_ignored() {
    let html = report(
        "10Jan22",
        &[row("Mon 10", "2300-1", "0655+1", "DX1", "KRP", "2330-1", "CPH", "0015+1")],
    );

    let activities = parser().parse(&html, ReportFormat::Html).unwrap();
    assert_eq!(activities[0].occurred_at, dt("2022-01-10 23:00:00"));
    assert_eq!(activities[1].occurred_at, dt("2022-01-10 06:55:00"));
    assert_eq!(activities[2].scheduled_time_departure, Some(dt("2022-01-10 23:30:00")));
    assert_eq!(activities[2].scheduled_time_arrival, Some(dt("2022-01-10 00:15:00")));
}

#[test]
fn test_hour_24_rolls_to_next_day() {
    let html = report("10Jan22", &[row("Mon 10", "", "2400", "OFF", "KRP", "", "KRP", "")]);
    let activities = parser().parse(&html, ReportFormat::Html).unwrap();
    assert_eq!(activities[0].kind, ActivityType::CheckOut);
    assert_eq!(activities[0].occurred_at, dt("2022-01-11 00:00:00"));
}

#[test]
fn test_day_label_keeps_anchor_month() {
    // a label after the month boundary still resolves into the anchor month
    let html = report(
        "28Jan22",
        &[
            row("Mon 31", "", "", "OFF", "KRP", "", "KRP", ""),
            row("Tue 01", "", "", "OFF", "KRP", "", "KRP", ""),
        ],
    );

    let activities = parser().parse(&html, ReportFormat::Html).unwrap();
    assert_eq!(activities[0].occurred_at, dt("2022-01-31 00:00:00"));
    assert_eq!(activities[1].occurred_at, dt("2022-01-01 00:00:00"));
}
