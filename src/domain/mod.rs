pub mod cart;
pub mod dates;
pub mod homestay;
pub mod payment;
pub mod pricing;
pub mod reservation;
