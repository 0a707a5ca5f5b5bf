#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Fee amounts fit u32

use serde::{Deserialize, Serialize};

use super::dates::StayDates;

/// How the platform service fee is derived for a stay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ServiceFeePolicy {
    /// Flat amount added to every booking.
    Fixed { amount: u32 },
    /// Rounded percentage of the room subtotal.
    PercentOfRoom { rate: f64 },
}

impl ServiceFeePolicy {
    pub fn fee(&self, room_total: u32) -> u32 {
        match *self {
            Self::Fixed { amount } => amount,
            Self::PercentOfRoom { rate } => (f64::from(room_total) * rate).round() as u32,
        }
    }
}

/// Line-item totals for a stay, handed to the rendering surface as-is.
///
/// `total` is always the sum of the parts; amounts are whole rupees, so a
/// negative total is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub nightly_rate: u32,
    pub nights: u32,
    pub room_total: u32,
    pub cleaning_fee: u32,
    pub service_fee: u32,
    pub total: u32,
}

impl PriceBreakdown {
    /// Compute the breakdown for a known night count. Returns `None` for a
    /// zero-night stay so the summary panel suppresses the breakdown instead
    /// of presenting a zero total as a valid quote.
    pub fn compute(
        nights: u32,
        nightly_rate: u32,
        cleaning_fee: u32,
        policy: ServiceFeePolicy,
    ) -> Option<Self> {
        if nights == 0 {
            return None;
        }
        let room_total = nightly_rate.saturating_mul(nights);
        let service_fee = policy.fee(room_total);
        Some(Self {
            nightly_rate,
            nights,
            room_total,
            cleaning_fee,
            service_fee,
            total: room_total
                .saturating_add(cleaning_fee)
                .saturating_add(service_fee),
        })
    }

    pub fn for_stay(
        dates: &StayDates,
        nightly_rate: u32,
        cleaning_fee: u32,
        policy: ServiceFeePolicy,
    ) -> Option<Self> {
        Self::compute(dates.nights(), nightly_rate, cleaning_fee, policy)
    }
}

impl std::fmt::Display for PriceBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<24} {:>8}",
            format!("₹{} × {} nights", self.nightly_rate, self.nights),
            format!("₹{}", self.room_total)
        )?;
        writeln!(
            f,
            "{:<24} {:>8}",
            "Cleaning fee",
            format!("₹{}", self.cleaning_fee)
        )?;
        writeln!(
            f,
            "{:<24} {:>8}",
            "Service fee",
            format!("₹{}", self.service_fee)
        )?;
        writeln!(f, "{}", "-".repeat(33))?;
        write!(f, "{:<24} {:>8}", "Total", format!("₹{}", self.total))
    }
}
