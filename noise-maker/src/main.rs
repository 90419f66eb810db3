mod args;
mod generator;

use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use args::CliArgs;
use clap::Parser;
use generator::{generate_access_log, generate_malformed_line};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let mut out: Box<dyn Write> = match args.output() {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    for _ in 0..*args.count() {
        let line = if rng.random_range(0..100) < *args.malformed_percent() {
            generate_malformed_line(&mut rng)
        } else {
            generate_access_log(&mut rng)
        };
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
