pub mod argon2;
pub mod errors;
pub mod legacy;

pub use argon2::PasswordHasher;
pub use argon2::DECOY_HASH;
pub use errors::PasswordError;
