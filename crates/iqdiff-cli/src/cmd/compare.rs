// crates/iqdiff-cli/src/cmd/compare.rs

use anyhow::Context;
use clap::Args;
use iqdiff_core::config::{
    DEFAULT_DEVICE_I, DEFAULT_DEVICE_Q, DEFAULT_NUM, DEFAULT_REFERENCE_I, DEFAULT_REFERENCE_Q,
};
use iqdiff_core::{dvb_compare, CompareConfig, IqPaths, MismatchPolicy};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Device I channel (25-bit hex words, one per line)
    #[arg(long, default_value = DEFAULT_DEVICE_I)]
    pub device_i: String,

    /// Device Q channel (25-bit hex words, one per line)
    #[arg(long, default_value = DEFAULT_DEVICE_Q)]
    pub device_q: String,

    /// Reference I channel (floats, one per line)
    #[arg(long, default_value = DEFAULT_REFERENCE_I)]
    pub ref_i: String,

    /// Reference Q channel (floats, one per line)
    #[arg(long, default_value = DEFAULT_REFERENCE_Q)]
    pub ref_q: String,

    /// Number of leading samples compared per channel
    #[arg(long, default_value_t = DEFAULT_NUM)]
    pub num: usize,
}

pub fn run(args: CompareArgs) -> anyhow::Result<()> {
    let cfg = CompareConfig {
        device: IqPaths::new(&args.device_i, &args.device_q),
        reference: IqPaths::new(&args.ref_i, &args.ref_q),
        num: args.num,
        // mismatches are logged and zeroed, the run still succeeds
        policy: MismatchPolicy::Zero,
    };

    let report = dvb_compare(&cfg).with_context(|| {
        format!(
            "compare device=({}, {}) reference=({}, {}) num={}",
            args.device_i, args.device_q, args.ref_i, args.ref_q, args.num
        )
    })?;

    let mismatched = report.mismatches().count();
    tracing::info!(
        num = report.num,
        i = report.i.contribution(),
        q = report.q.contribution(),
        mismatched,
        "compare ok"
    );

    println!("{}", report.delta());
    Ok(())
}
