//! Parameters of the rent-versus-mortgage projection

use crate::projection::error::{ProjectionError, Result};

/// Inputs of [`simulate`](crate::projection::simulate)
///
/// Rates are yearly fractions (`0.07` is 7 %). Money amounts are monthly
/// unless stated otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Apartment price today
    pub apartment_price: f64,

    /// Capital available at the start; the renter deposits it, the buyer
    /// pays it down on the apartment
    pub down_payment: f64,

    /// Yearly mortgage interest rate
    pub mortgage_rate: f64,

    /// Yearly deposit interest rate, compounded monthly
    pub deposit_rate: f64,

    /// Yearly inflation of the apartment price
    pub inflation_rate: f64,

    /// Monthly salary, same for both holders
    pub salary: f64,

    /// Monthly rent paid by the renter
    pub rent: f64,

    pub food: f64,

    pub utilities: f64,

    /// Horizon in years; the simulation runs `12 * years` monthly steps
    pub years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            apartment_price: 20_000_000.0,
            down_payment: 1_000_000.0,
            mortgage_rate: 0.07,
            deposit_rate: 0.09,
            inflation_rate: 0.07,
            salary: 200_000.0,
            rent: 30_000.0,
            food: 15_000.0,
            utilities: 5_000.0,
            years: 20,
        }
    }
}

impl ProjectionConfig {
    /// Same parameters over a different horizon (e.g. 30 years = 360 months)
    pub fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    /// Number of monthly steps
    pub fn months(&self) -> u32 {
        self.years.saturating_mul(12)
    }

    /// Amount borrowed by the buyer
    pub fn mortgage_debt(&self) -> f64 {
        self.apartment_price - self.down_payment
    }

    /// Outgoings shared by both holders
    pub fn living_costs(&self) -> f64 {
        self.food + self.utilities
    }

    pub fn validate(&self) -> Result<()> {
        if self.years == 0 {
            return Err(ProjectionError::ZeroHorizon.logged());
        }

        let fields = [
            ("apartment price", self.apartment_price),
            ("down payment", self.down_payment),
            ("mortgage rate", self.mortgage_rate),
            ("deposit rate", self.deposit_rate),
            ("inflation rate", self.inflation_rate),
            ("salary", self.salary),
            ("rent", self.rent),
            ("food", self.food),
            ("utilities", self.utilities),
        ];
        if let Some(&(name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ProjectionError::NonFinite(name).logged());
        }

        if self.down_payment > self.apartment_price {
            return Err(ProjectionError::DownPaymentTooLarge {
                down_payment: self.down_payment,
                price: self.apartment_price,
            }
            .logged());
        }
        Ok(())
    }
}
