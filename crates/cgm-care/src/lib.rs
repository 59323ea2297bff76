//! Coverage intake and content site for CGM devices and diabetic supplies.

pub mod config;
pub mod contact;
pub mod content;
pub mod coverage;
pub mod error;
pub mod telemetry;
