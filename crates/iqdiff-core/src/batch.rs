// crates/iqdiff-core/src/batch.rs

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::IqPaths;
use crate::error::{CmpError, Result};
use crate::fixed::q23::Q23;

/// Appended to the input file stem to name the decoded output.
pub const FLOAT_SUFFIX: &str = "_float.txt";

/// `data/fir_i_out.txt` -> `data/fir_i_out_float.txt`.
/// The extension, if any, is replaced; the directory is kept.
pub fn float_output_path(input: &Path) -> PathBuf {
    let mut name: OsString = input.file_stem().unwrap_or_default().to_os_string();
    name.push(FLOAT_SUFFIX);
    input.with_file_name(name)
}

/// Decode every line of `text` as a device word.
/// On failure returns the 1-based line number with the token error.
pub fn decode_text(text: &str) -> std::result::Result<Vec<Q23>, (usize, CmpError)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| Q23::from_hex(line).map_err(|e| (idx + 1, e)))
        .collect()
}

/// Decode a hex sample file and write the rendered decimals next to it.
///
/// The output is created or truncated; a failed run may leave it partial.
pub fn decode_file(input: &Path) -> Result<PathBuf> {
    let text = fs::read_to_string(input).map_err(|e| CmpError::io(input, e))?;
    let samples = decode_text(&text).map_err(|(line, e)| e.at_line(input, line))?;

    let mut out = String::with_capacity(samples.len() * 10);
    for s in &samples {
        out.push_str(&s.render());
        out.push('\n');
    }

    let out_path = float_output_path(input);
    fs::write(&out_path, out).map_err(|e| CmpError::io(&out_path, e))?;

    tracing::debug!(
        input = %input.display(),
        output = %out_path.display(),
        samples = samples.len(),
        "decoded device samples"
    );
    Ok(out_path)
}

/// Decode the I file, then the Q file. Returns the decoded paths.
pub fn decode_pair(device: &IqPaths) -> Result<IqPaths> {
    let i = decode_file(&device.i)?;
    let q = decode_file(&device.q)?;
    Ok(IqPaths { i, q })
}
