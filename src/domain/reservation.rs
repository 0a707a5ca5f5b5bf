use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::dates::StayDates;
use crate::error::{BookingError, Result};

/// One failed validation check, reported per field so the surface can mark
/// the offending input instead of silently disabling the submit control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

/// Immutable reservation record assembled on submit and handed to the next
/// checkout step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetails {
    pub homestay_id: String,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub nights: u32,
    pub guests: u32,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub special_requests: String,
}

/// Form state for the "Dates & Guests" / "Guest Details" step.
#[derive(Debug, Clone)]
pub struct ReservationForm {
    pub dates: StayDates,
    guests: u32,
    max_guests: u32,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub special_requests: String,
}

impl ReservationForm {
    pub fn new(default_guests: u32, max_guests: u32) -> Self {
        let max_guests = max_guests.max(1);
        Self {
            dates: StayDates::default(),
            guests: default_guests.clamp(1, max_guests),
            max_guests,
            guest_name: String::new(),
            guest_email: String::new(),
            guest_phone: String::new(),
            special_requests: String::new(),
        }
    }

    pub fn guests(&self) -> u32 {
        self.guests
    }

    pub fn set_guests(&mut self, guests: u32) {
        self.guests = guests.clamp(1, self.max_guests);
    }

    /// Stepper increment, clamped at the listing's guest capacity.
    pub fn add_guest(&mut self) {
        if self.guests < self.max_guests {
            self.guests += 1;
        }
    }

    /// Stepper decrement. Refuses to go below one guest.
    pub fn remove_guest(&mut self) {
        if self.guests > 1 {
            self.guests -= 1;
        }
    }

    /// All validation failures for the current state, one entry per field.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        match self.dates.validate() {
            Ok(()) => {}
            Err(BookingError::MissingField { field }) => errors.push(FieldError {
                field,
                reason: "required".into(),
            }),
            Err(err) => errors.push(FieldError {
                field: "checkOut",
                reason: err.to_string(),
            }),
        }

        if self.guest_name.trim().is_empty() {
            errors.push(FieldError {
                field: "guestName",
                reason: "required".into(),
            });
        }
        if self.guest_email.trim().is_empty() {
            errors.push(FieldError {
                field: "guestEmail",
                reason: "required".into(),
            });
        } else if !self.guest_email.contains('@') {
            errors.push(FieldError {
                field: "guestEmail",
                reason: "not a valid email address".into(),
            });
        }
        if self.guest_phone.trim().is_empty() {
            errors.push(FieldError {
                field: "guestPhone",
                reason: "required".into(),
            });
        }

        errors
    }

    pub fn is_submittable(&self) -> bool {
        self.field_errors().is_empty()
    }

    /// Assemble the immutable reservation record. The form itself stays as-is
    /// so the guest can go back and edit.
    pub fn submit(&self, homestay_id: &str) -> Result<BookingDetails> {
        if let Some(first) = self.field_errors().into_iter().next() {
            return Err(BookingError::InvalidReservation {
                reason: format!("{}: {}", first.field, first.reason),
            });
        }
        let (Some(check_in), Some(check_out)) = (self.dates.check_in, self.dates.check_out) else {
            return Err(BookingError::MissingField { field: "checkIn" });
        };
        Ok(BookingDetails {
            homestay_id: homestay_id.to_owned(),
            check_in,
            check_out,
            nights: self.dates.nights(),
            guests: self.guests,
            guest_name: self.guest_name.trim().to_owned(),
            guest_email: self.guest_email.trim().to_owned(),
            guest_phone: self.guest_phone.trim().to_owned(),
            special_requests: self.special_requests.clone(),
        })
    }
}
