pub mod types;

use std::path::Path;

use crate::error::{BookingError, Result};
use types::Config;

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        BookingError::Config(format!(
            "failed to read config file {}: {e}",
            path.display()
        ))
    })?;
    let config: Config = serde_yml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn load_config_missing_file_returns_defaults() {
        let result = load_config(Path::new("/tmp/nonexistent_bookstay_config_12345.yaml"));
        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.payment.processing_delay_ms, 2000);
    }

    #[test]
    fn load_config_valid_yaml() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            "fees:\n  service_fee_rate: 0.1\npayment:\n  timeout_secs: 10\nbooking:\n  max_guests: 8"
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert!((config.fees.service_fee_rate - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.payment.timeout_secs, 10);
        assert_eq!(config.booking.max_guests, 8);
    }

    #[test]
    fn load_config_partial_yaml() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "payment:\n  processing_delay_ms: 50").unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.payment.processing_delay_ms, 50);
        // fees and booking should get defaults
        assert_eq!(config.fees.default_cleaning_fee, 500);
        assert_eq!(config.booking.default_guests, 2);
    }

    #[test]
    fn load_config_empty_yaml() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp).unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.payment.timeout_secs, 30);
        assert_eq!(config.booking.max_guests, 6);
    }

    #[test]
    fn load_config_invalid_yaml() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "{{{{invalid yaml: [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(result.is_err());
    }
}
