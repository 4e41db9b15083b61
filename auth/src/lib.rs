//! Password primitives shared by services.
//!
//! Provides Argon2id hashing for provisioning user records and constant-time
//! verification of a plaintext secret against a stored Argon2 or bcrypt
//! hash. Services define their own comparator traits and adapt
//! [`PasswordHasher`] behind them.
//!
//! # Examples
//!
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("secret1").unwrap();
//! assert!(hasher.verify("secret1", &hash).unwrap());
//! assert!(!hasher.verify("secret2", &hash).unwrap());
//! ```

pub mod password;

pub use password::PasswordError;
pub use password::DECOY_HASH;
pub use password::PasswordHasher;
