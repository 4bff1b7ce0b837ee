//! Day-cursor fold over the table rows and activity construction.

use super::classify::{self, ClockTime, Duty};
use super::layout::{Column, ColumnLayout, RowView};
use super::table::Row;
use crate::errors::{AppError, AppResult};
use crate::models::activity::Activity;
use crate::models::activity_type::ActivityType;
use crate::models::airport::Airport;
use crate::parser::ActivityFactory;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static DAY_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]{3} (\d{2})").unwrap_or_else(|e| panic!("{e}")));

/// The "current day" carried from row to row.
///
/// Year and month always come from the period anchor, so a label after a
/// month boundary resolves into the anchor's month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCursor {
    anchor: NaiveDate,
    day: NaiveDate,
}

impl DayCursor {
    pub fn new(anchor: NaiveDate) -> Self {
        Self { anchor, day: anchor }
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn midnight(&self) -> NaiveDateTime {
        self.day.and_time(NaiveTime::MIN)
    }

    /// Cursor for a row with date label `label`; an empty label keeps the current day.
    pub fn advance(self, row: usize, label: &str) -> AppResult<Self> {
        if label.is_empty() {
            return Ok(self);
        }

        let malformed = || AppError::MalformedDateLabel {
            row,
            label: label.to_string(),
        };

        let day: u32 = DAY_LABEL
            .captures(label)
            .and_then(|c| c[1].parse().ok())
            .ok_or_else(malformed)?;

        let date = NaiveDate::from_ymd_opt(self.anchor.year(), self.anchor.month(), day)
            .ok_or_else(malformed)?;

        Ok(Self {
            anchor: self.anchor,
            day: date,
        })
    }
}

/// Fold the rows into activities, threading the day cursor.
pub fn assemble(
    factory: &dyn ActivityFactory,
    layout: &ColumnLayout,
    anchor: NaiveDate,
    rows: &[Row],
) -> AppResult<Vec<Activity>> {
    let (_, activities) = rows.iter().enumerate().try_fold(
        (DayCursor::new(anchor), Vec::new()),
        |(cursor, mut out), (i, cells)| {
            let row = layout.bind(i + 1, cells)?;
            let cursor = cursor.advance(row.number(), row.get(Column::Date))?;
            out.extend(assemble_row(factory, &row, &cursor)?);
            Ok::<_, AppError>((cursor, out))
        },
    )?;

    Ok(activities)
}

/// Activities of a single row: optional check-in, optional check-out, then the duty.
pub fn assemble_row(
    factory: &dyn ActivityFactory,
    row: &RowView<'_>,
    cursor: &DayCursor,
) -> AppResult<Vec<Activity>> {
    let plan = classify::classify(row);
    let mut out = Vec::with_capacity(plan.activity_count());

    if let Some(at) = plan.check_in {
        out.push(factory.create(
            ActivityType::CheckIn,
            Airport::new(row.get(Column::To))?,
            at.on(cursor.day()),
            None,
            None,
            None,
        ));
    }

    if let Some(at) = plan.check_out {
        out.push(factory.create(
            ActivityType::CheckOut,
            Airport::new(row.get(Column::From))?,
            at.on(cursor.day()),
            None,
            None,
            None,
        ));
    }

    let from = Airport::new(row.get(Column::From))?;
    let duty = match plan.duty {
        Duty::Flight => {
            let departure = scheduled(row, Column::ScheduledDeparture)?;
            let arrival = scheduled(row, Column::ScheduledArrival)?;
            factory.create(
                ActivityType::Flight,
                from,
                cursor.midnight(),
                Some(Airport::new(row.get(Column::To))?),
                Some(departure.on(cursor.day())),
                Some(arrival.on(cursor.day())),
            )
        }
        other => factory.create(
            other.activity_type(),
            from,
            cursor.midnight(),
            None,
            None,
            None,
        ),
    };
    out.push(duty);

    Ok(out)
}

fn scheduled(row: &RowView<'_>, column: Column) -> AppResult<ClockTime> {
    let value = row.get(column);
    classify::decode_time(value).ok_or_else(|| AppError::MalformedTime {
        row: row.number(),
        column: column.name(),
        value: value.to_string(),
    })
}
