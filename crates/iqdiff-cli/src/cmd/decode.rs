// crates/iqdiff-cli/src/cmd/decode.rs

use anyhow::Context;
use clap::Args;
use iqdiff_core::batch;
use iqdiff_core::config::{DEFAULT_DEVICE_I, DEFAULT_DEVICE_Q};
use iqdiff_core::IqPaths;

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Device I channel hex file
    #[arg(long, default_value = DEFAULT_DEVICE_I)]
    pub i: String,

    /// Device Q channel hex file
    #[arg(long, default_value = DEFAULT_DEVICE_Q)]
    pub q: String,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let device = IqPaths::new(&args.i, &args.q);
    let out = batch::decode_pair(&device)
        .with_context(|| format!("decode device i={} q={}", args.i, args.q))?;

    println!("{}", out.i.display());
    println!("{}", out.q.display());
    Ok(())
}
