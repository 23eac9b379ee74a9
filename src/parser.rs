use std::ops::Not;

use nalgebra::{Point3, Quaternion};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Value `{0}` is not a number.")]
    NotANumber(String),

    #[error("Missing value {0}.")]
    MissingValue(&'static str),

    #[error("Unexpected trailing value `{0}`.")]
    TrailingValue(String),

    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,

    #[error("Line {line}: {source}")]
    OnLine {
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

use ParseError::*;

pub type Result<T> = std::result::Result<T, ParseError>;

fn parse_value<T: std::str::FromStr>(value: &str) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| NotANumber(value.trim().to_string()))
}

/// Parses a comma separated point `x,y,z`.
pub fn parse_point(input: &str) -> Result<Point3<i32>> {
    let mut values = input.split(',').map(parse_value::<i32>);

    let x = values.next().ok_or(MissingValue("x coordinate"))??;
    let y = values.next().ok_or(MissingValue("y coordinate"))??;
    let z = values.next().ok_or(MissingValue("z coordinate"))??;

    if let Some(extra) = input.split(',').nth(3) {
        return Err(TrailingValue(extra.trim().to_string()));
    }

    Ok(Point3::new(x, y, z))
}

/// Parses one sample line `x y z w`.
fn parse_sample(input: &str) -> Result<Quaternion<f32>> {
    let mut tokens = input.split_whitespace();
    let mut values = tokens.by_ref().map(parse_value::<f32>);

    let x = values.next().ok_or(MissingValue("x component"))??;
    let y = values.next().ok_or(MissingValue("y component"))??;
    let z = values.next().ok_or(MissingValue("z component"))??;
    let w = values.next().ok_or(MissingValue("w component"))??;

    if let Some(extra) = tokens.next() {
        return Err(TrailingValue(extra.to_string()));
    }

    Ok(Quaternion::new(w, x, y, z))
}

fn is_empty_line(line: &str) -> bool {
    let line = line.trim();

    line.is_empty() || line.starts_with('#')
}

/// Parses a sample file: one quaternion `x y z w` per line, blank lines and
/// `#` comments ignored.
pub fn parse_samples(input: &str) -> Result<Vec<Quaternion<f32>>> {
    let samples = input
        .lines()
        .enumerate()
        .filter(|(_, line)| is_empty_line(line).not())
        .map(|(idx, line)| {
            parse_sample(line).map_err(|err| OnLine {
                line: idx + 1,
                source: Box::new(err),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if samples.is_empty() {
        return Err(UnexpectedEndOfInput);
    }

    Ok(samples)
}
