// crates/iqdiff-core/src/fixed/mod.rs

pub mod q23;
