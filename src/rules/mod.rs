//! Rules module - Pure text substitutions applied to file contents
//!
//! Provides:
//! - currency: dollar amounts to rupee amounts, USD to INR

pub mod currency;
