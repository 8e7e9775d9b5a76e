//! Fixed-horizon financial projections
//!
//! A monthly mortgage annuity calculator and a rent-versus-buy capital
//! simulation under inflation. Everything is plain `f64` arithmetic over a
//! fixed number of monthly steps.

pub mod config;
pub mod error;
pub mod simulation;

pub use config::ProjectionConfig;
pub use error::ProjectionError;
pub use simulation::{mortgage_payment, simulate, Holder, ProjectionReport};
