pub mod alphabet;
pub mod caesar;
pub mod codec;
pub mod config;
pub mod error;
pub mod key;
pub mod optimizer;
pub mod random;
pub mod scorer;
// cmd and reports are binary modules, declared in main.rs.
