use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;

use crate::error::{BookingError, Result};
use crate::ports::processor::{ChargeRequest, PaymentProcessor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Upi,
    NetBanking,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card => write!(f, "Credit / Debit Card"),
            Self::Upi => write!(f, "UPI"),
            Self::NetBanking => write!(f, "Net Banking"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Bank {
    Sbi,
    Hdfc,
    Icici,
    Axis,
    Kotak,
    Pnb,
}

impl Bank {
    /// Banks offered on the net-banking sub-form, in display order.
    pub const ALL: [Self; 6] = [
        Self::Sbi,
        Self::Hdfc,
        Self::Icici,
        Self::Axis,
        Self::Kotak,
        Self::Pnb,
    ];
}

impl std::fmt::Display for Bank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sbi => write!(f, "SBI"),
            Self::Hdfc => write!(f, "HDFC"),
            Self::Icici => write!(f, "ICICI"),
            Self::Axis => write!(f, "Axis"),
            Self::Kotak => write!(f, "Kotak"),
            Self::Pnb => write!(f, "PNB"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDetails {
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub card_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStage {
    SelectingMethod,
    EnteringDetails,
    Submitting,
    Done,
}

/// Payment record produced once a charge goes through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub payment_method: PaymentMethod,
    pub transaction_id: String,
}

/// Timestamp-based transaction id matching the reference format. Not
/// collision-resistant; a real integration takes the id the provider returns.
pub fn new_transaction_id() -> String {
    format!("TXN{}", Utc::now().timestamp_millis())
}

/// Form state for the payment step.
///
/// Detail values for each method are retained independently, so switching
/// card → UPI → card brings the entered card fields back untouched.
#[derive(Debug, Clone)]
pub struct PaymentForm {
    stage: PaymentStage,
    method: PaymentMethod,
    pub card: CardDetails,
    pub upi_id: String,
    pub bank: Option<Bank>,
    terms_accepted: bool,
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentForm {
    pub fn new() -> Self {
        Self {
            stage: PaymentStage::SelectingMethod,
            method: PaymentMethod::Card,
            card: CardDetails::default(),
            upi_id: String::new(),
            bank: None,
            terms_accepted: false,
        }
    }

    pub fn stage(&self) -> PaymentStage {
        self.stage
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    /// Switch the visible detail sub-form. Values entered for other methods
    /// are kept.
    pub fn select_method(&mut self, method: PaymentMethod) -> Result<()> {
        self.guard_mutable()?;
        self.method = method;
        self.stage = PaymentStage::EnteringDetails;
        Ok(())
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) -> Result<()> {
        self.guard_mutable()?;
        self.terms_accepted = accepted;
        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        self.terms_accepted
            && !matches!(self.stage, PaymentStage::Submitting | PaymentStage::Done)
    }

    /// Run the charge. Blocked until terms are accepted; the processor is
    /// never invoked otherwise. While the charge is in flight the form is in
    /// `Submitting` and every mutation is rejected. A successful charge moves
    /// to `Done` and yields the payment record; timeout or decline returns
    /// the form to `EnteringDetails` so the guest can retry.
    pub async fn submit(
        &mut self,
        amount: u32,
        processor: &dyn PaymentProcessor,
        deadline: Duration,
    ) -> Result<PaymentDetails> {
        match self.stage {
            PaymentStage::Submitting => return Err(BookingError::PaymentInProgress),
            PaymentStage::Done => return Err(BookingError::AlreadyPaid),
            PaymentStage::SelectingMethod | PaymentStage::EnteringDetails => {}
        }
        if !self.terms_accepted {
            return Err(BookingError::TermsNotAccepted);
        }

        self.stage = PaymentStage::Submitting;
        let request = ChargeRequest {
            amount,
            method: self.method,
        };
        tracing::info!(amount, method = %self.method, "submitting payment");

        match timeout(deadline, processor.charge(&request)).await {
            Ok(Ok(receipt)) => {
                self.stage = PaymentStage::Done;
                tracing::info!(transaction_id = %receipt.transaction_id, "payment complete");
                Ok(PaymentDetails {
                    payment_method: self.method,
                    transaction_id: receipt.transaction_id,
                })
            }
            Ok(Err(err)) => {
                self.stage = PaymentStage::EnteringDetails;
                tracing::warn!(error = %err, "payment failed");
                Err(err)
            }
            Err(_) => {
                self.stage = PaymentStage::EnteringDetails;
                Err(BookingError::PaymentTimeout {
                    secs: deadline.as_secs(),
                })
            }
        }
    }

    fn guard_mutable(&self) -> Result<()> {
        match self.stage {
            PaymentStage::Submitting => Err(BookingError::PaymentInProgress),
            PaymentStage::Done => Err(BookingError::AlreadyPaid),
            _ => Ok(()),
        }
    }
}
