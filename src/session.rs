use std::sync::Arc;
use std::time::Duration;

use crate::config::types::Config;
use crate::domain::homestay::Homestay;
use crate::domain::payment::{PaymentDetails, PaymentForm};
use crate::domain::pricing::{PriceBreakdown, ServiceFeePolicy};
use crate::domain::reservation::{BookingDetails, ReservationForm};
use crate::error::{BookingError, Result};
use crate::ports::catalog::HomestayCatalog;
use crate::ports::navigator::Navigator;
use crate::ports::processor::PaymentProcessor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    Booking,
    Payment,
    Complete,
}

/// One guest's checkout flow, from picking dates to a paid booking.
///
/// The session is the single owner of all transient checkout state; views
/// receive it explicitly instead of each keeping their own copy of the
/// listing and totals. Dropping the session discards everything — nothing is
/// shared across sessions or persisted.
pub struct BookingSession {
    navigator: Arc<dyn Navigator>,
    processor: Arc<dyn PaymentProcessor>,
    config: Config,
    homestay: Homestay,
    pub reservation: ReservationForm,
    pub payment: PaymentForm,
    booking: Option<BookingDetails>,
    order: Option<PriceBreakdown>,
    receipt: Option<PaymentDetails>,
}

impl BookingSession {
    pub fn start(
        catalog: &dyn HomestayCatalog,
        navigator: Arc<dyn Navigator>,
        processor: Arc<dyn PaymentProcessor>,
        config: Config,
        homestay_id: &str,
    ) -> Result<Self> {
        let homestay = catalog.get(homestay_id)?;
        let reservation = ReservationForm::new(
            config.booking.default_guests,
            homestay.max_guests.min(config.booking.max_guests),
        );
        tracing::debug!(homestay_id, "booking session started");
        Ok(Self {
            navigator,
            processor,
            config,
            homestay,
            reservation,
            payment: PaymentForm::new(),
            booking: None,
            order: None,
            receipt: None,
        })
    }

    pub fn homestay(&self) -> &Homestay {
        &self.homestay
    }

    pub fn step(&self) -> CheckoutStep {
        if self.receipt.is_some() {
            CheckoutStep::Complete
        } else if self.booking.is_some() {
            CheckoutStep::Payment
        } else {
            CheckoutStep::Booking
        }
    }

    pub fn booking(&self) -> Option<&BookingDetails> {
        self.booking.as_ref()
    }

    pub fn receipt(&self) -> Option<&PaymentDetails> {
        self.receipt.as_ref()
    }

    /// Breakdown frozen together with the reservation record. This is what
    /// the order summary shows and what the processor is charged, regardless
    /// of later edits to the reservation form.
    pub fn order_summary(&self) -> Option<&PriceBreakdown> {
        self.order.as_ref()
    }

    /// Current price breakdown, derived fresh from the reservation dates on
    /// every call. `None` until the dates describe at least one night.
    pub fn quote(&self) -> Option<PriceBreakdown> {
        PriceBreakdown::for_stay(
            &self.reservation.dates,
            self.homestay.price_per_night,
            self.homestay.cleaning_fee,
            self.fee_policy(),
        )
    }

    fn fee_policy(&self) -> ServiceFeePolicy {
        self.homestay
            .service_fee
            .unwrap_or_else(|| self.config.fees.service_fee_policy())
    }

    /// Submit the reservation form. On success the assembled record is frozen
    /// on the session and exactly one of the continuation callback or the
    /// fallback navigation to "/checkout" runs.
    pub fn continue_to_checkout(
        &mut self,
        on_continue: Option<&dyn Fn(&BookingDetails)>,
    ) -> Result<&BookingDetails> {
        if self.receipt.is_some() {
            return Err(BookingError::AlreadyPaid);
        }
        let details = self.reservation.submit(&self.homestay.id)?;
        let quote = self.quote().ok_or_else(|| BookingError::InvalidReservation {
            reason: "no priced stay to pay for".into(),
        })?;
        tracing::info!(
            homestay_id = %details.homestay_id,
            nights = details.nights,
            guests = details.guests,
            total = quote.total,
            "reservation submitted"
        );
        self.order = Some(quote);
        let details = self.booking.insert(details);
        match on_continue {
            Some(callback) => callback(details),
            None => self.navigator.navigate("/checkout"),
        }
        Ok(details)
    }

    /// Charge the total frozen with the reservation through the payment
    /// form. On success the payment record is frozen and exactly one of the
    /// completion callback or the fallback navigation to "/dashboard" runs.
    pub async fn complete_payment(
        &mut self,
        on_complete: Option<&dyn Fn(&PaymentDetails)>,
    ) -> Result<&PaymentDetails> {
        if self.booking.is_none() {
            return Err(BookingError::InvalidReservation {
                reason: "reservation has not been submitted".into(),
            });
        }
        // Charge what the guest agreed to, not the live form state
        let Some(quote) = self.order else {
            return Err(BookingError::InvalidReservation {
                reason: "no priced stay to pay for".into(),
            });
        };

        let deadline = Duration::from_secs(self.config.payment.timeout_secs);
        let details = self
            .payment
            .submit(quote.total, self.processor.as_ref(), deadline)
            .await?;
        let details = self.receipt.insert(details);
        match on_complete {
            Some(callback) => callback(details),
            None => self.navigator.navigate("/dashboard"),
        }
        Ok(details)
    }
}
