//! Authentication implementations.

mod account;
mod password;

pub use account::DemoAccount;
pub use password::Argon2PasswordService;
