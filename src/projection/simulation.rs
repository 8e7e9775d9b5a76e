//! Month-by-month capital simulation

use std::fmt;

use log::{debug, info};

use crate::projection::config::ProjectionConfig;
use crate::projection::error::{ProjectionError, Result};

/// Monthly annuity payment that repays `debt` in `months` instalments
///
/// `payment = debt · r / (1 - (1 + r)^-months)` with `r` the monthly rate.
/// A zero rate degenerates to `debt / months`.
///
/// # Examples
///
/// ```
/// use dmatrix::projection::mortgage_payment;
///
/// let payment = mortgage_payment(120_000.0, 0.0, 120).unwrap();
/// assert_eq!(payment, 1_000.0);
/// ```
pub fn mortgage_payment(debt: f64, monthly_rate: f64, months: u32) -> Result<f64> {
    if months == 0 {
        return Err(ProjectionError::ZeroHorizon.logged());
    }

    let payment = if monthly_rate == 0.0 {
        debt / f64::from(months)
    } else {
        let coefficient = monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-f64::from(months)));
        coefficient * debt
    };

    if !payment.is_finite() {
        return Err(ProjectionError::NonFinite("mortgage payment").logged());
    }
    Ok(payment)
}

/// A person's running account with a fixed monthly income and outcome
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Holder {
    /// Money currently stored
    pub account: f64,
    /// Salary, paid monthly
    pub income: f64,
    /// Rent or mortgage payment plus living costs, paid monthly
    pub outcome: f64,
}

impl Holder {
    pub fn new(account: f64, income: f64, outcome: f64) -> Self {
        Self {
            account,
            income,
            outcome,
        }
    }

    /// Advances one month: interest accrues first, then the net income lands
    pub fn step(&mut self, monthly_interest: f64) {
        self.account *= 1.0 + monthly_interest;
        self.account += self.income - self.outcome;
    }
}

/// Outcome of [`simulate`]
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionReport {
    /// Buyer's monthly mortgage payment
    pub monthly_payment: f64,
    /// Renter's capital after buying the apartment at the inflated price
    pub renter_capital: f64,
    /// Buyer's capital after the mortgage is repaid
    pub buyer_capital: f64,
    /// Apartment price at the end of the horizon
    pub inflated_price: f64,
    /// Number of monthly steps simulated
    pub months: u32,
}

impl ProjectionReport {
    /// Positive when renting and saving beats taking the mortgage
    pub fn renter_advantage(&self) -> f64 {
        self.renter_capital - self.buyer_capital
    }
}

impl fmt::Display for ProjectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Monthly mortgage payment: {:.2}", self.monthly_payment)?;
        writeln!(f, "Apartment price after {} months: {:.2}", self.months, self.inflated_price)?;
        writeln!(f, "Renter final capital: {:.2}", self.renter_capital)?;
        writeln!(f, "Buyer final capital: {:.2}", self.buyer_capital)
    }
}

/// Compares renting-and-saving against buying with a mortgage
///
/// The renter starts with the down payment on deposit and pays rent; the
/// buyer starts with nothing and pays the mortgage. Both earn the same
/// salary, pay the same living costs and earn deposit interest every month.
/// At the end the renter buys the apartment at its inflated price.
pub fn simulate(config: &ProjectionConfig) -> Result<ProjectionReport> {
    config.validate()?;

    let months = config.months();
    let monthly_payment = mortgage_payment(
        config.mortgage_debt(),
        config.mortgage_rate / 12.0,
        months,
    )?;
    let monthly_interest = config.deposit_rate / 12.0;

    let mut renter = Holder::new(
        config.down_payment,
        config.salary,
        config.rent + config.living_costs(),
    );
    let mut buyer = Holder::new(0.0, config.salary, monthly_payment + config.living_costs());

    for month in 0..months {
        renter.step(monthly_interest);
        buyer.step(monthly_interest);
        if (month + 1) % 12 == 0 {
            debug!(
                "year {}: renter {:.2}, buyer {:.2}",
                (month + 1) / 12,
                renter.account,
                buyer.account
            );
        }
    }

    let inflated_price =
        config.apartment_price * (1.0 + config.inflation_rate).powf(f64::from(config.years));
    renter.account -= inflated_price;

    if !renter.account.is_finite() || !buyer.account.is_finite() {
        return Err(ProjectionError::NonFinite("final capital").logged());
    }

    info!("simulated {} months of rent versus mortgage", months);
    Ok(ProjectionReport {
        monthly_payment,
        renter_capital: renter.account,
        buyer_capital: buyer.account,
        inflated_price,
        months,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_payment() {
        assert_eq!(mortgage_payment(2_400.0, 0.0, 24).unwrap(), 100.0);
    }

    #[test]
    fn test_zero_months() {
        assert_eq!(
            mortgage_payment(1_000.0, 0.01, 0),
            Err(ProjectionError::ZeroHorizon)
        );
    }

    #[test]
    fn test_payment_repays_debt() {
        // Amortise month by month and check the balance reaches zero
        let (debt, rate, months) = (100_000.0, 0.005, 60);
        let payment = mortgage_payment(debt, rate, months).unwrap();

        let mut balance = debt;
        for _ in 0..months {
            balance = balance * (1.0 + rate) - payment;
        }
        assert!(balance.abs() < 1e-6, "balance left: {}", balance);
    }

    #[test]
    fn test_holder_step() {
        let mut holder = Holder::new(1_000.0, 500.0, 200.0);
        holder.step(0.01);
        assert!((holder.account - 1_310.0).abs() < 1e-9);
    }
}
