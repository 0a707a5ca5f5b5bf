use serde::{Deserialize, Serialize};

use crate::domain::pricing::ServiceFeePolicy;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub fees: FeeConfig,
    #[serde(default)]
    pub payment: PaymentConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeeConfig {
    /// Platform service fee as a fraction of the room subtotal, used for
    /// listings without their own fee policy.
    #[serde(default = "default_service_fee_rate")]
    pub service_fee_rate: f64,
    #[serde(default = "default_cleaning_fee")]
    pub default_cleaning_fee: u32,
}

impl FeeConfig {
    pub fn service_fee_policy(&self) -> ServiceFeePolicy {
        ServiceFeePolicy::PercentOfRoom {
            rate: self.service_fee_rate,
        }
    }
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            service_fee_rate: default_service_fee_rate(),
            default_cleaning_fee: default_cleaning_fee(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentConfig {
    /// Simulated processing latency of the bundled processor adapter.
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
    /// Hard deadline on a charge before the submit fails with a timeout.
    #[serde(default = "default_payment_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
            timeout_secs: default_payment_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingConfig {
    #[serde(default = "default_guests")]
    pub default_guests: u32,
    #[serde(default = "default_max_guests")]
    pub max_guests: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            default_guests: default_guests(),
            max_guests: default_max_guests(),
        }
    }
}

fn default_service_fee_rate() -> f64 {
    0.12
}

fn default_cleaning_fee() -> u32 {
    500
}

fn default_processing_delay_ms() -> u64 {
    2000
}

fn default_payment_timeout_secs() -> u64 {
    30
}

fn default_guests() -> u32 {
    2
}

fn default_max_guests() -> u32 {
    6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert!((config.fees.service_fee_rate - 0.12).abs() < f64::EPSILON);
        assert_eq!(config.fees.default_cleaning_fee, 500);
        assert_eq!(config.payment.processing_delay_ms, 2000);
        assert_eq!(config.payment.timeout_secs, 30);
        assert_eq!(config.booking.default_guests, 2);
        assert_eq!(config.booking.max_guests, 6);
    }

    #[test]
    fn default_policy_is_percentage() {
        let policy = FeeConfig::default().service_fee_policy();
        assert_eq!(policy.fee(7500), 900);
    }

    #[test]
    fn config_serde_roundtrip() {
        let original = Config::default();
        let yaml = serde_yml::to_string(&original).unwrap();
        let restored: Config = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(
            restored.payment.processing_delay_ms,
            original.payment.processing_delay_ms
        );
        assert_eq!(restored.booking.max_guests, original.booking.max_guests);
        assert!(
            (restored.fees.service_fee_rate - original.fees.service_fee_rate).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn config_deserialize_with_overrides() {
        let yaml = "payment:\n  processing_delay_ms: 0";
        let config: Config = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.payment.processing_delay_ms, 0);
        // Other fields get defaults
        assert_eq!(config.payment.timeout_secs, 30);
        assert_eq!(config.booking.max_guests, 6);
    }
}
