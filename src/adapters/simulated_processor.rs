use std::time::Duration;

use async_trait::async_trait;

use crate::config::types::PaymentConfig;
use crate::domain::payment::new_transaction_id;
use crate::error::Result;
use crate::ports::processor::{ChargeReceipt, ChargeRequest, PaymentProcessor};

/// Demo processor: waits for the configured latency and approves every
/// charge. A real gateway integration replaces this adapter behind the same
/// port, keeping the typed decline path the form already handles.
pub struct SimulatedProcessor {
    delay: Duration,
}

impl SimulatedProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &PaymentConfig) -> Self {
        Self::new(Duration::from_millis(config.processing_delay_ms))
    }
}

#[async_trait]
impl PaymentProcessor for SimulatedProcessor {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeReceipt> {
        tracing::debug!(amount = request.amount, "simulating payment processing");
        tokio::time::sleep(self.delay).await;
        Ok(ChargeReceipt {
            transaction_id: new_transaction_id(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentMethod;

    #[tokio::test(start_paused = true)]
    async fn charge_approves_after_delay() {
        let processor = SimulatedProcessor::new(Duration::from_millis(2000));
        let receipt = processor
            .charge(&ChargeRequest {
                amount: 8250,
                method: PaymentMethod::Card,
            })
            .await
            .unwrap();
        assert!(receipt.transaction_id.starts_with("TXN"));
    }

    #[test]
    fn zero_delay_resolves_immediately() {
        let processor = SimulatedProcessor::from_config(&PaymentConfig {
            processing_delay_ms: 0,
            timeout_secs: 30,
        });
        let receipt = tokio_test::block_on(processor.charge(&ChargeRequest {
            amount: 100,
            method: PaymentMethod::Upi,
        }));
        assert!(receipt.is_ok());
    }
}
