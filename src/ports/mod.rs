pub mod catalog;
pub mod navigator;
pub mod processor;
