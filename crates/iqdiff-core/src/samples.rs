// crates/iqdiff-core/src/samples.rs

use std::fs;
use std::path::Path;

use crate::config::IqPaths;
use crate::error::{CmpError, Result};

pub fn parse_sample(text: &str) -> Result<f64> {
    let t = text.trim();
    t.parse::<f64>().map_err(|source| CmpError::FloatToken {
        text: text.to_string(),
        source,
    })
}

/// Read one float per line. Every line counts, including the last one
/// when it lacks a trailing newline.
pub fn read_samples(path: &Path) -> Result<Vec<f64>> {
    let text = fs::read_to_string(path).map_err(|e| CmpError::io(path, e))?;
    let samples = text
        .lines()
        .enumerate()
        .map(|(idx, line)| parse_sample(line).map_err(|e| e.at_line(path, idx + 1)))
        .collect::<Result<Vec<f64>>>()?;

    tracing::debug!(path = %path.display(), samples = samples.len(), "read samples");
    Ok(samples)
}

/// Index-aligned I and Q sample sequences.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IqSamples {
    pub i: Vec<f64>,
    pub q: Vec<f64>,
}

impl IqSamples {
    pub fn read(paths: &IqPaths) -> Result<IqSamples> {
        Ok(IqSamples {
            i: read_samples(&paths.i)?,
            q: read_samples(&paths.q)?,
        })
    }
}
