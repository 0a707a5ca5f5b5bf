pub mod logging_navigator;
pub mod memory_catalog;
pub mod simulated_processor;
