use std::path::PathBuf;

use anyhow::Context;
use engine_math::{parser, BoundsInt, QuaternionAverage};
use log::{debug, info, LevelFilter};
use nalgebra::{Point3, UnitQuaternion};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "engine-math")]
struct Config {
    /// Raise log level (-v debug, -vv trace)
    #[structopt(short, long, parse(from_occurrences), global = true)]
    verbose: u8,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Greatest common divisor of two or more integers
    Gcd {
        #[structopt(required = true, min_values = 2, allow_hyphen_values = true)]
        values: Vec<i32>,
    },

    /// Nearest point inside a box, corners given as x,y,z
    ClosestPoint {
        #[structopt(long, parse(try_from_str = parser::parse_point), allow_hyphen_values = true)]
        min: Point3<i32>,

        #[structopt(long, parse(try_from_str = parser::parse_point), allow_hyphen_values = true)]
        max: Point3<i32>,

        #[structopt(long, parse(try_from_str = parser::parse_point), allow_hyphen_values = true)]
        point: Point3<i32>,
    },

    /// Running average of the quaternions in a file, one `x y z w` per line
    Average {
        input: PathBuf,

        /// Only print the mean of all samples
        #[structopt(long)]
        final_only: bool,
    },
}

fn init_logger(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .context("failed to build logger instance")
}

fn display_quaternion(q: &UnitQuaternion<f32>) -> String {
    itertools::join(&[q.i, q.j, q.k, q.w], " ")
}

fn run_average(input: PathBuf, final_only: bool) -> anyhow::Result<()> {
    let input = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let samples = parser::parse_samples(&input)?;
    info!("averaging {} samples", samples.len());

    let mut average = QuaternionAverage::new();

    for sample in &samples {
        average = average.add(sample);
        let mean = average.mean()?;

        if !final_only {
            println!("{}", display_quaternion(&mean));
        }
    }

    if final_only {
        println!("{}", display_quaternion(&average.mean()?));
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_args();

    init_logger(config.verbose)?;
    debug!("{:?}", config);

    match config.command {
        Command::Gcd { values } => {
            let result = engine_math::gcd_all(&values).context("no values given")?;
            println!("{}", result);
        }
        Command::ClosestPoint { min, max, point } => {
            let bounds = BoundsInt::from_min_max(min, max);
            let closest = bounds.closest_point(&point);
            println!("{}", itertools::join(closest.iter(), " "));
        }
        Command::Average { input, final_only } => run_average(input, final_only)?,
    }

    Ok(())
}
