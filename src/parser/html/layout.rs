//! Fixed column schema of the activity grid.

use crate::errors::{AppError, AppResult};

/// Columns the parser reads. Local-time twins of the time columns are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Date,
    CheckIn,
    CheckOut,
    Activity,
    From,
    ScheduledDeparture,
    To,
    ScheduledArrival,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Date,
        Column::CheckIn,
        Column::CheckOut,
        Column::Activity,
        Column::From,
        Column::ScheduledDeparture,
        Column::To,
        Column::ScheduledArrival,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::CheckIn => "check-in",
            Column::CheckOut => "check-out",
            Column::Activity => "activity",
            Column::From => "from",
            Column::ScheduledDeparture => "STD",
            Column::To => "to",
            Column::ScheduledArrival => "STA",
        }
    }
}

/// Maps each [`Column`] to its cell index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub date: usize,
    pub check_in: usize,
    pub check_out: usize,
    pub activity: usize,
    pub from: usize,
    pub scheduled_departure: usize,
    pub to: usize,
    pub scheduled_arrival: usize,
}

impl ColumnLayout {
    /// The `ctl00_Main_activityGrid` layout, UTC columns.
    pub const fn activity_grid() -> Self {
        Self {
            date: 1,
            check_in: 5,
            check_out: 7,
            activity: 8,
            from: 11,
            scheduled_departure: 13,
            to: 15,
            scheduled_arrival: 17,
        }
    }

    pub fn index(&self, column: Column) -> usize {
        match column {
            Column::Date => self.date,
            Column::CheckIn => self.check_in,
            Column::CheckOut => self.check_out,
            Column::Activity => self.activity,
            Column::From => self.from,
            Column::ScheduledDeparture => self.scheduled_departure,
            Column::To => self.to,
            Column::ScheduledArrival => self.scheduled_arrival,
        }
    }

    /// Minimum number of cells a row needs.
    pub fn width(&self) -> usize {
        Column::ALL
            .iter()
            .map(|c| self.index(*c) + 1)
            .max()
            .unwrap_or(0)
    }

    /// Check `cells` against the layout. `number` is the 1-based data row number.
    pub fn bind<'a>(&'a self, number: usize, cells: &'a [String]) -> AppResult<RowView<'a>> {
        let expected = self.width();
        if cells.len() < expected {
            return Err(AppError::MalformedColumnLayout {
                row: number,
                expected,
                found: cells.len(),
            });
        }

        Ok(RowView {
            number,
            cells,
            layout: self,
        })
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::activity_grid()
    }
}

/// A row that is known to be wide enough for its layout.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    number: usize,
    cells: &'a [String],
    layout: &'a ColumnLayout,
}

impl<'a> RowView<'a> {
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn get(&self, column: Column) -> &'a str {
        self.cells
            .get(self.layout.index(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}
