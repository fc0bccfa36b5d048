// crates/iqdiff-core/src/config.rs

use std::path::PathBuf;

use crate::compare::MismatchPolicy;

pub const DEFAULT_DEVICE_I: &str = "data/fir_i_out.txt";
pub const DEFAULT_DEVICE_Q: &str = "data/fir_q_out.txt";
pub const DEFAULT_REFERENCE_I: &str = "data/matlab_i_out.txt";
pub const DEFAULT_REFERENCE_Q: &str = "data/matlab_q_out.txt";

/// Samples compared per channel in the standard FIR run.
pub const DEFAULT_NUM: usize = 33_372;

/// A pair of files, one per channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IqPaths {
    pub i: PathBuf,
    pub q: PathBuf,
}

impl IqPaths {
    pub fn new(i: impl Into<PathBuf>, q: impl Into<PathBuf>) -> IqPaths {
        IqPaths {
            i: i.into(),
            q: q.into(),
        }
    }
}

/// Everything one comparison run needs.
///
/// `device` holds the hex sample files; their decoded siblings are derived
/// from these paths (see `batch::float_output_path`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareConfig {
    pub device: IqPaths,
    pub reference: IqPaths,
    pub num: usize,
    pub policy: MismatchPolicy,
}

impl Default for CompareConfig {
    fn default() -> Self {
        CompareConfig {
            device: IqPaths::new(DEFAULT_DEVICE_I, DEFAULT_DEVICE_Q),
            reference: IqPaths::new(DEFAULT_REFERENCE_I, DEFAULT_REFERENCE_Q),
            num: DEFAULT_NUM,
            policy: MismatchPolicy::default(),
        }
    }
}
