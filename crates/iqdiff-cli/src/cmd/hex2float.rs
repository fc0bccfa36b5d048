// crates/iqdiff-cli/src/cmd/hex2float.rs

use clap::Args;
use iqdiff_core::hex2float;

#[derive(Args, Debug)]
pub struct Hex2floatArgs {
    /// Hex words, e.g. 1C00000
    #[arg(required = true)]
    pub tokens: Vec<String>,
}

pub fn run(args: Hex2floatArgs) -> anyhow::Result<()> {
    for t in &args.tokens {
        println!("{}", hex2float(t)?);
    }
    Ok(())
}
