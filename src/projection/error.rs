use log::warn;
use thiserror::Error;

/// Errors raised by the financial projections
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("projection horizon must cover at least one month")]
    ZeroHorizon,

    #[error("{0} is not a finite number")]
    NonFinite(&'static str),

    #[error("down payment {down_payment} exceeds apartment price {price}")]
    DownPaymentTooLarge { down_payment: f64, price: f64 },
}

impl ProjectionError {
    /// Logs the error as a warning and hands it back for returning
    pub(crate) fn logged(self) -> Self {
        warn!("{}", self);
        self
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
