//! Shift model and related types.
//!
//! This module defines the shift records managed through the shifts
//! endpoint, and the payload used to create or update one.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A break taken during a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Break {
    /// The start time of the break.
    pub start_time: NaiveDateTime,
    /// The end time of the break.
    pub end_time: NaiveDateTime,
    /// Whether the break is paid (true) or unpaid (false).
    #[serde(default)]
    pub is_paid: bool,
}

impl Break {
    fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

/// A rostered or worked shift as stored by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Server-assigned identifier.
    pub id: String,
    /// The employee working the shift.
    pub employee_id: String,
    /// The date of the shift.
    pub date: NaiveDate,
    /// The start time of the shift.
    pub start_time: NaiveDateTime,
    /// The end time of the shift.
    pub end_time: NaiveDateTime,
    /// Breaks taken during the shift.
    #[serde(default)]
    pub breaks: Vec<Break>,
}

impl Shift {
    /// Calculates the worked hours, excluding unpaid breaks.
    ///
    /// # Examples
    ///
    /// ```
    /// use backoffice_client::models::{Break, Shift};
    /// use chrono::{NaiveDate, NaiveDateTime};
    /// use rust_decimal::Decimal;
    ///
    /// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     start_time: at("2026-01-15 09:00:00"),
    ///     end_time: at("2026-01-15 17:30:00"),
    ///     breaks: vec![Break {
    ///         start_time: at("2026-01-15 12:00:00"),
    ///         end_time: at("2026-01-15 12:30:00"),
    ///         is_paid: false,
    ///     }],
    /// };
    /// assert_eq!(shift.worked_hours(), Decimal::new(80, 1));
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        worked_hours(self.start_time, self.end_time, &self.breaks)
    }

    /// Returns the day of the week for the shift.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }
}

/// Payload for creating or replacing a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewShift {
    /// The employee working the shift.
    pub employee_id: String,
    /// The date of the shift.
    pub date: NaiveDate,
    /// The start time of the shift.
    pub start_time: NaiveDateTime,
    /// The end time of the shift.
    pub end_time: NaiveDateTime,
    /// Breaks taken during the shift.
    #[serde(default)]
    pub breaks: Vec<Break>,
}

impl NewShift {
    /// Calculates the worked hours, excluding unpaid breaks.
    pub fn worked_hours(&self) -> Decimal {
        worked_hours(self.start_time, self.end_time, &self.breaks)
    }
}

impl From<Shift> for NewShift {
    fn from(shift: Shift) -> Self {
        NewShift {
            employee_id: shift.employee_id,
            date: shift.date,
            start_time: shift.start_time,
            end_time: shift.end_time,
            breaks: shift.breaks,
        }
    }
}

fn worked_hours(start: NaiveDateTime, end: NaiveDateTime, breaks: &[Break]) -> Decimal {
    let total_minutes = (end - start).num_minutes();
    let unpaid_break_minutes: i64 = breaks
        .iter()
        .filter(|b| !b.is_paid)
        .map(Break::duration_minutes)
        .sum();

    Decimal::new(total_minutes - unpaid_break_minutes, 0) / Decimal::new(60, 0)
}
