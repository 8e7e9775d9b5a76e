//! Rent versus mortgage projection
//!
//! Runs the default 20-year scenario and the same parameters over 30 years,
//! printing the monthly payment and both final capitals.

use dmatrix::projection::{simulate, ProjectionConfig};
use log::error;

fn main() {
    env_logger::init();

    println!("Rent versus mortgage projection");
    println!("===============================\n");

    for config in [
        ProjectionConfig::default(),
        ProjectionConfig::default().with_years(30),
    ] {
        println!("Horizon: {} years ({} months)", config.years, config.months());
        match simulate(&config) {
            Ok(report) => {
                print!("{}", report);
                println!("Renter advantage: {:.2}\n", report.renter_advantage());
            }
            Err(err) => {
                error!("projection failed: {}", err);
                println!("Error: {}\n", err);
            }
        }
    }
}
