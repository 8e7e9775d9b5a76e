use dmatrix::{FillPattern, Matrix, MatrixConfig, MatrixError};
use log::error;

fn main() {
    env_logger::init();

    println!("dmatrix: dense matrix operations");

    // Failures are reported, never turned into a process exit status
    if let Err(err) = run() {
        error!("demo aborted: {}", err);
        println!("\nError: {}", err);
    }
}

fn run() -> Result<(), MatrixError> {
    let config = MatrixConfig::default();

    let a = Matrix::from_vec(
        3,
        4,
        vec![2.0, 2.0, 2.0, 1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0],
    )?;

    let mut b = Matrix::allocate(4, 3)?;
    b.fill_with_data(&[3.0, 3.0, 3.0, 3.0, 3.0, 12.0, 3.0, 3.0, 3.0, 3.0, 3.0, 30.0])?;

    println!("\nMatrix A:");
    print!("{}", a.render(&config));

    println!("\nMatrix B:");
    print!("{}", b.render(&config));

    let c = a.multiply(&b)?;
    println!("\nA × B:");
    print!("{}", c.render(&config));

    println!("\nA × B + (A × B)ᵀ:");
    print!("{}", c.sum(&c.transpose())?.render(&config));

    println!("\nBᵀ × 0.5:");
    print!("{}", (&b.transpose() * 0.5).render(&config));

    let m = Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 0.0, 2.0, 9.0, -3.0])?;
    println!("\nMatrix M:");
    print!("{}", m.render(&config));
    println!("det(M) = {:.2}", m.determinant()?);
    println!("det(A × B) = {:.2}", c.determinant()?);

    let identity = Matrix::<f64>::create(3, 3, FillPattern::Identity)?;
    println!("det(I₃) = {:.2}", identity.determinant()?);

    // Expected to fail: A is not square
    match a.determinant() {
        Ok(det) => println!("det(A) = {:.2}", det),
        Err(err) => println!("det(A): {}", err),
    }

    let random = Matrix::<f64>::create_with(2, 2, FillPattern::Random, &MatrixConfig::seeded(42))?;
    println!("\nSeeded random 2×2:");
    print!("{}", random.render(&config));

    Ok(())
}
