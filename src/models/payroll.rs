//! Payroll records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Processing state of a payroll record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Being prepared; amounts may still change.
    Draft,
    /// Approved for payment.
    Approved,
    /// Paid out.
    Paid,
}

/// One employee's pay for one period, as stored by the server.
///
/// # Example
///
/// ```
/// use backoffice_client::models::{PayrollRecord, PayrollStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = PayrollRecord {
///     id: "pay_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     period_start: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     period_end: NaiveDate::from_ymd_opt(2026, 1, 19).unwrap(),
///     gross_pay: Decimal::new(122_880, 2),
///     deductions: Decimal::new(24_500, 2),
///     status: PayrollStatus::Draft,
/// };
/// assert_eq!(record.net_pay(), Decimal::new(98_380, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Server-assigned identifier.
    pub id: String,
    /// The employee being paid.
    pub employee_id: String,
    /// First day of the pay period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the pay period (inclusive).
    pub period_end: NaiveDate,
    /// Pay before deductions.
    pub gross_pay: Decimal,
    /// Tax and other deductions.
    #[serde(default)]
    pub deductions: Decimal,
    /// Processing state.
    pub status: PayrollStatus,
}

impl PayrollRecord {
    /// Returns gross pay minus deductions.
    pub fn net_pay(&self) -> Decimal {
        self.gross_pay - self.deductions
    }

    /// Returns true if the pay period contains `date`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.period_start <= date && date <= self.period_end
    }
}

/// Payload for creating or replacing a payroll record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPayroll {
    /// The employee being paid.
    pub employee_id: String,
    /// First day of the pay period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the pay period (inclusive).
    pub period_end: NaiveDate,
    /// Pay before deductions.
    pub gross_pay: Decimal,
    /// Tax and other deductions.
    #[serde(default)]
    pub deductions: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_deserialize_record_with_string_amounts() {
        let json = r#"{
            "id": "pay_001",
            "employee_id": "emp_001",
            "period_start": "2026-01-13",
            "period_end": "2026-01-19",
            "gross_pay": "1228.80",
            "deductions": "245.00",
            "status": "approved"
        }"#;

        let record: PayrollRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, PayrollStatus::Approved);
        assert_eq!(record.net_pay(), dec("983.80"));
    }

    #[test]
    fn test_deductions_default_to_zero() {
        let json = r#"{
            "id": "pay_002",
            "employee_id": "emp_002",
            "period_start": "2026-01-13",
            "period_end": "2026-01-19",
            "gross_pay": 399.88,
            "status": "draft"
        }"#;

        let record: PayrollRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.deductions, Decimal::ZERO);
        assert_eq!(record.net_pay(), dec("399.88"));
    }

    #[test]
    fn test_covers_is_inclusive() {
        let record = PayrollRecord {
            id: "pay_001".to_string(),
            employee_id: "emp_001".to_string(),
            period_start: make_date("2026-01-13"),
            period_end: make_date("2026-01-19"),
            gross_pay: dec("100"),
            deductions: Decimal::ZERO,
            status: PayrollStatus::Paid,
        };

        assert!(record.covers(make_date("2026-01-13")));
        assert!(record.covers(make_date("2026-01-19")));
        assert!(!record.covers(make_date("2026-01-20")));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PayrollStatus::Approved).unwrap(),
            "\"approved\""
        );
    }
}
