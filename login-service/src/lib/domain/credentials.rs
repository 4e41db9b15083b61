//! Sign-in credential verification.
//!
//! Raw form input is parsed into typed credentials, looked up in the user
//! directory and compared against the stored hash. Every business refusal
//! collapses to `None`; infrastructure failures surface as `VerifyError`.

pub mod errors;
pub mod models;
pub mod ports;
pub mod service;
