use async_trait::async_trait;

use crate::domain::payment::PaymentMethod;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeRequest {
    /// Amount in whole rupees.
    pub amount: u32,
    pub method: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeReceipt {
    pub transaction_id: String,
}

/// Asynchronous charge port. Implementations decide latency and outcome; the
/// caller is responsible for wrapping the call in a timeout.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeReceipt>;
}
