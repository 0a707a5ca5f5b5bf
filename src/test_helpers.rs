use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::adapters::simulated_processor::SimulatedProcessor;
use crate::domain::payment::new_transaction_id;
use crate::error::Result;
use crate::ports::navigator::Navigator;
use crate::ports::processor::{ChargeReceipt, ChargeRequest, PaymentProcessor};

/// Navigator that remembers every path it was sent to.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_owned());
    }
}

/// Simulated processor with no latency, for tests that don't exercise timing.
pub fn instant_processor() -> SimulatedProcessor {
    SimulatedProcessor::new(Duration::ZERO)
}

/// Processor that approves instantly and remembers every charged amount.
#[derive(Debug, Default)]
pub struct RecordingProcessor {
    amounts: Mutex<Vec<u32>>,
}

impl RecordingProcessor {
    pub fn amounts(&self) -> Vec<u32> {
        self.amounts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentProcessor for RecordingProcessor {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeReceipt> {
        self.amounts.lock().unwrap().push(request.amount);
        Ok(ChargeReceipt {
            transaction_id: new_transaction_id(),
        })
    }
}
