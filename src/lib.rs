mod random;
mod quaternion;
mod geometry;
pub mod error;

pub use crate::error::{QuatError, QuatResult};
pub use crate::quaternion::{Quaternion, FP_BOUND};
pub use crate::random::Randf64;
