// crates/iqdiff-core/src/lib.rs

pub mod error;

pub mod batch;
pub mod compare;
pub mod config;
pub mod fixed;
pub mod samples;

pub use crate::compare::{dvb_compare, Channel, ChannelOutcome, MismatchPolicy, Report};
pub use crate::config::{CompareConfig, IqPaths};
pub use crate::error::{CmpError, Result};
pub use crate::fixed::q23::{hex2float, Q23};
