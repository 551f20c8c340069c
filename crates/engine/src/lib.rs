pub use account::Account;
pub use calculator::{Calculator, Key, Operator};
pub use error::EngineError;
pub use money::Money;
pub use registration::{Registration, ValidationError, validate};

mod account;
mod calculator;
mod error;
mod money;
mod registration;
