use std::error;
use std::fmt;

pub type QuatResult<T> = Result<T, QuatError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuatError {
    /// An operation divided by the norm of an effectively zero quaternion.
    ZeroDivision,
    /// An argument had to lie on the unit 3-sphere but does not.
    NotUnit,
}
impl fmt::Display for QuatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuatError::ZeroDivision => {
                write!(f, "zero division: quaternion norm is within the floating point bound of zero")
            }
            QuatError::NotUnit => {
                write!(f, "quaternion does not lie on the unit 3-sphere")
            }
        }
    }
}
impl error::Error for QuatError {}
