use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};

const MS_PER_NIGHT: i64 = 86_400_000;

/// Check-in/check-out pair for a stay. Either side may be unset while the
/// guest is still picking dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StayDates {
    pub check_in: Option<NaiveDateTime>,
    pub check_out: Option<NaiveDateTime>,
}

impl StayDates {
    pub fn new(check_in: Option<NaiveDateTime>, check_out: Option<NaiveDateTime>) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Parse a `YYYY-MM-DD` pair as it arrives from the date inputs.
    pub fn parse(check_in: &str, check_out: &str) -> Result<Self> {
        Ok(Self {
            check_in: Some(parse_day(check_in)?),
            check_out: Some(parse_day(check_out)?),
        })
    }

    /// Number of nights between check-in and check-out, ceiling-rounded so a
    /// partial day counts as a full night. Zero when either date is unset or
    /// the range is inverted, regardless of what the inputs allowed.
    pub fn nights(&self) -> u32 {
        let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) else {
            return 0;
        };
        let span_ms = (check_out - check_in).num_milliseconds();
        if span_ms <= 0 {
            return 0;
        }
        // Manual ceiling; span_ms > 0 is guaranteed above
        u32::try_from((span_ms + MS_PER_NIGHT - 1) / MS_PER_NIGHT).unwrap_or(u32::MAX)
    }

    /// Defensive range check at computation time. Input widgets constrain the
    /// minimum selectable checkout, but a stored state can still be invalid.
    pub fn validate(&self) -> Result<()> {
        match (self.check_in, self.check_out) {
            (None, _) => Err(BookingError::MissingField { field: "checkIn" }),
            (_, None) => Err(BookingError::MissingField { field: "checkOut" }),
            (Some(ci), Some(co)) if co <= ci => Err(BookingError::InvalidDate {
                reason: "check-out must be after check-in".into(),
            }),
            _ => Ok(()),
        }
    }
}

fn parse_day(s: &str) -> Result<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| BookingError::InvalidDate {
        reason: format!("invalid date '{s}', expected YYYY-MM-DD"),
    })?;
    Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn three_night_stay() {
        let dates = StayDates::parse("2025-01-15", "2025-01-18").unwrap();
        assert_eq!(dates.nights(), 3);
    }

    #[test]
    fn missing_either_date_is_zero_nights() {
        assert_eq!(StayDates::default().nights(), 0);
        let only_in = StayDates::new(Some(day(2025, 1, 15)), None);
        assert_eq!(only_in.nights(), 0);
        let only_out = StayDates::new(None, Some(day(2025, 1, 18)));
        assert_eq!(only_out.nights(), 0);
    }

    #[test]
    fn same_day_is_zero_nights() {
        let dates = StayDates::new(Some(day(2025, 1, 15)), Some(day(2025, 1, 15)));
        assert_eq!(dates.nights(), 0);
    }

    #[test]
    fn inverted_range_is_zero_nights() {
        let dates = StayDates::new(Some(day(2025, 1, 18)), Some(day(2025, 1, 15)));
        assert_eq!(dates.nights(), 0);
    }

    #[test]
    fn partial_day_rounds_up() {
        let check_in = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let check_out = day(2025, 1, 18);
        let dates = StayDates::new(Some(check_in), Some(check_out));
        // 2 days 10 hours rounds up to 3 nights
        assert_eq!(dates.nights(), 3);
    }

    #[test]
    fn one_millisecond_over_rounds_to_next_night() {
        let check_in = day(2025, 1, 15);
        let check_out = check_in + chrono::Duration::milliseconds(86_400_001);
        let dates = StayDates::new(Some(check_in), Some(check_out));
        assert_eq!(dates.nights(), 2);
    }

    #[test]
    fn single_night() {
        let dates = StayDates::parse("2025-06-01", "2025-06-02").unwrap();
        assert_eq!(dates.nights(), 1);
    }

    #[test]
    fn parse_rejects_bad_format() {
        assert!(StayDates::parse("15-01-2025", "2025-01-18").is_err());
        assert!(StayDates::parse("2025-01-15", "not-a-date").is_err());
    }

    #[test]
    fn validate_missing_check_in() {
        let dates = StayDates::new(None, Some(day(2025, 1, 18)));
        assert!(matches!(
            dates.validate(),
            Err(BookingError::MissingField { field: "checkIn" })
        ));
    }

    #[test]
    fn validate_inverted_range() {
        let dates = StayDates::new(Some(day(2025, 1, 18)), Some(day(2025, 1, 15)));
        assert!(matches!(
            dates.validate(),
            Err(BookingError::InvalidDate { .. })
        ));
    }

    #[test]
    fn validate_accepts_forward_range() {
        let dates = StayDates::parse("2025-01-15", "2025-01-18").unwrap();
        assert!(dates.validate().is_ok());
    }
}
