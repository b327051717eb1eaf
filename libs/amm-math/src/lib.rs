#![no_std]

pub mod full_math;
pub mod sqrt;
pub mod uq64x64;

pub use full_math::*;
pub use sqrt::*;
pub use uq64x64::*;
