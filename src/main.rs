use std::env;
use std::process;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use matrix_pool::{Error, Matrix, available_workers, multiply};

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args: Vec<String> = env::args().collect();
    let print = args.iter().any(|arg| arg == "--print");
    let positional: Vec<&String> = args
        .iter()
        .skip(1)
        .filter(|arg| !arg.starts_with("--"))
        .collect();

    let Some(size_arg) = positional.first() else {
        eprintln!("Usage: {} <size> [workers] [seed] [--print]", args[0]);
        eprintln!("  size     dimension of the square input matrices (>= 1)");
        eprintln!("  workers  worker threads per stage (default: available parallelism)");
        eprintln!("  seed     seed for reproducible matrix generation");
        eprintln!("  --print  dump the product matrices");
        process::exit(1);
    };

    let size: usize = size_arg.parse()?;
    if size == 0 {
        return Err(Error::ZeroDimension);
    }
    let workers: usize = match positional.get(1) {
        Some(arg) => arg.parse()?,
        None => available_workers(),
    };
    if workers == 0 {
        return Err(Error::NoWorkers);
    }
    let seed: Option<u64> = positional.get(2).map(|arg| arg.parse()).transpose()?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("Dimensionality of the square matrices is: {size}");
    println!("The thread pool size has been initialized to: {workers}\n");

    let a = Matrix::random(size, "a", &mut rng)?;
    let mut b = Matrix::random(size, "b", &mut rng)?;
    b.transpose()?;

    let c = Matrix::random(size, "c", &mut rng)?;
    let mut d = Matrix::random(size, "d", &mut rng)?;
    d.transpose()?;

    let mut grand_total = Duration::ZERO;

    let start = Instant::now();
    let x = multiply(&a, &b, "x", workers)?;
    let elapsed = start.elapsed();
    grand_total += elapsed;
    println!("Calculation of X (product of A and B) complete. Time to compute matrix: {elapsed:?}");

    let start = Instant::now();
    let mut y = multiply(&c, &d, "y", workers)?;
    let elapsed = start.elapsed();
    grand_total += elapsed;
    println!("Calculation of Y (product of C and D) complete. Time to compute matrix: {elapsed:?}");

    // Y feeds the next stage as the right operand, so its rows have to
    // become the dot-product partners first.
    y.transpose()?;

    let start = Instant::now();
    let z = multiply(&x, &y, "z", workers)?;
    let elapsed = start.elapsed();
    grand_total += elapsed;
    println!("Calculation of Z (product of X and Y) complete. Time to compute matrix: {elapsed:?}");

    if print {
        print!("{x}");
        print!("{y}");
        print!("{z}");
    }

    println!("Finished! Total time taken = {grand_total:?}");
    Ok(())
}
