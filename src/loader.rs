//! Reads vertex positions from a text file: one `x,y` pair per line, in
//! vertex-index order. Blank lines are skipped.

use crate::error::SamplerError;
use crate::points::PointSet;
use nalgebra::Point2;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read points file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected 'x,y', got '{text}'")]
    Malformed { line: usize, text: String },

    #[error(transparent)]
    Invalid(#[from] SamplerError),
}

/// Load a [`PointSet`] from the given file.
pub fn read_points(path: impl AsRef<Path>) -> Result<PointSet, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    let mut points = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let point = parse_pair(text).ok_or_else(|| LoadError::Malformed {
            line: idx + 1,
            text: text.to_string(),
        })?;
        points.push(point);
    }
    Ok(PointSet::new(points)?)
}

fn parse_pair(text: &str) -> Option<Point2<f64>> {
    let (x, y) = text.split_once(',')?;
    Some(Point2::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}
