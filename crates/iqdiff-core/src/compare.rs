// crates/iqdiff-core/src/compare.rs

use std::fmt;

use crate::batch;
use crate::config::CompareConfig;
use crate::error::{CmpError, Result};
use crate::samples::IqSamples;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    I,
    Q,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::I => f.write_str("I"),
            Channel::Q => f.write_str("Q"),
        }
    }
}

/// What to do when a channel's decoded and reference lengths differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Report the mismatch and count the channel as zero deviation.
    /// The total then hides the mismatch; check `Report::mismatches`.
    #[default]
    Zero,
    /// Fail the run with `CmpError::LengthMismatch`.
    Abort,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChannelOutcome {
    /// Sum of absolute differences over the first `num` samples.
    Delta(f64),
    LengthMismatch { decoded: usize, reference: usize },
}

impl ChannelOutcome {
    /// Contribution to the run total. A mismatch contributes zero.
    pub fn contribution(&self) -> f64 {
        match *self {
            ChannelOutcome::Delta(d) => d,
            ChannelOutcome::LengthMismatch { .. } => 0.0,
        }
    }
}

/// Sum `|decoded[k] - reference[k]|` for `k < num`.
///
/// Lengths are checked first: unequal lengths yield `LengthMismatch` and
/// `num` is not looked at. With equal lengths, `num` past the end fails
/// with `SampleCountExceeded`.
pub fn channel_delta(
    channel: Channel,
    decoded: &[f64],
    reference: &[f64],
    num: usize,
) -> Result<ChannelOutcome> {
    if decoded.len() != reference.len() {
        return Ok(ChannelOutcome::LengthMismatch {
            decoded: decoded.len(),
            reference: reference.len(),
        });
    }
    if num > decoded.len() {
        return Err(CmpError::SampleCountExceeded {
            channel,
            num,
            len: decoded.len(),
        });
    }

    let delta = decoded[..num]
        .iter()
        .zip(&reference[..num])
        .fold(0.0_f64, |acc, (d, r)| acc + (d - r).abs());
    Ok(ChannelOutcome::Delta(delta))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    pub num: usize,
    pub i: ChannelOutcome,
    pub q: ChannelOutcome,
}

impl Report {
    /// Total deviation across both channels.
    pub fn delta(&self) -> f64 {
        self.i.contribution() + self.q.contribution()
    }

    pub fn outcome(&self, channel: Channel) -> ChannelOutcome {
        match channel {
            Channel::I => self.i,
            Channel::Q => self.q,
        }
    }

    /// Channels whose lengths did not match, with (decoded, reference) lengths.
    pub fn mismatches(&self) -> impl Iterator<Item = (Channel, usize, usize)> + '_ {
        [Channel::I, Channel::Q]
            .into_iter()
            .filter_map(|ch| match self.outcome(ch) {
                ChannelOutcome::LengthMismatch { decoded, reference } => {
                    Some((ch, decoded, reference))
                }
                ChannelOutcome::Delta(_) => None,
            })
    }
}

fn apply_policy(
    channel: Channel,
    outcome: ChannelOutcome,
    policy: MismatchPolicy,
) -> Result<ChannelOutcome> {
    match (outcome, policy) {
        (ChannelOutcome::LengthMismatch { decoded, reference }, MismatchPolicy::Abort) => {
            Err(CmpError::LengthMismatch {
                channel,
                decoded,
                reference,
            })
        }
        (ChannelOutcome::LengthMismatch { decoded, reference }, MismatchPolicy::Zero) => {
            tracing::warn!(%channel, decoded, reference, "decoded and reference lengths differ; channel counted as 0");
            Ok(outcome)
        }
        (ChannelOutcome::Delta(_), _) => Ok(outcome),
    }
}

/// Compare in-memory sequences, I channel first.
pub fn compare_samples(
    decoded: &IqSamples,
    reference: &IqSamples,
    num: usize,
    policy: MismatchPolicy,
) -> Result<Report> {
    let i = channel_delta(Channel::I, &decoded.i, &reference.i, num)?;
    let i = apply_policy(Channel::I, i, policy)?;

    let q = channel_delta(Channel::Q, &decoded.q, &reference.q, num)?;
    let q = apply_policy(Channel::Q, q, policy)?;

    Ok(Report { num, i, q })
}

/// Full run: decode the device files to their `_float.txt` siblings,
/// read those back with the reference files, and compare.
pub fn dvb_compare(cfg: &CompareConfig) -> Result<Report> {
    let decoded_paths = batch::decode_pair(&cfg.device)?;
    let decoded = IqSamples::read(&decoded_paths)?;
    let reference = IqSamples::read(&cfg.reference)?;

    let report = compare_samples(&decoded, &reference, cfg.num, cfg.policy)?;
    tracing::debug!(num = cfg.num, delta = report.delta(), "compare done");
    Ok(report)
}
