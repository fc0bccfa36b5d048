// crates/iqdiff-cli/src/cmd/mod.rs

pub mod compare;
pub mod decode;
pub mod hex2float;
