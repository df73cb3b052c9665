use dense_core::{debug_checks_enabled, DenseCoreError, General, Matrix};

/// Builds an n x n matrix whose entry (i, j) is `i * n + j`.
fn counting_matrix(n: usize) -> Result<General, DenseCoreError> {
    let data = (0..n * n).map(|k| k as f64).collect();
    General::new(data, n as isize, n as isize, n as isize)
}

fn main() -> Result<(), DenseCoreError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Diagnostic checks enabled: {}", debug_checks_enabled());

    let n = 4;
    let half = (n / 2) as isize;
    let a = counting_matrix(n)?;
    println!("{}", a);

    // Sum the four quadrants of `a` into a 2x2 accumulator, without copying any block.
    let mut acc: General = General::zeros(half as usize, half as usize);
    for bi in 0..2 {
        for bj in 0..2 {
            let block = a.view(bi * half, bj * half, half, half);
            block.check()?;
            acc.add(&block);
        }
    }
    println!("Quadrant sum:\n{}", acc);

    // Write the sum back into the bottom-right quadrant through a view.
    let mut corner = a.view(half, half, half, half);
    let before = corner.to_vec();
    corner.copy(&acc);
    log::info!(
        "Bottom-right {:?} block: {:?} -> {:?}",
        corner.dims(),
        before,
        corner.to_vec()
    );
    println!("{}", a);

    // Stride padding makes this copy differ from its source, even with equal cells.
    let snapshot = corner.clone();
    println!(
        "snapshot == corner: {}, snapshot == acc: {}",
        snapshot.equal(&corner),
        snapshot.equal(&acc)
    );

    // Externally supplied geometry is validated before use.
    match General::new(vec![0.0; 5], 2, 3, 3) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(err) => log::warn!("Rejected input: {}", err),
    }

    Ok(())
}
