use derive_more::Display;

// An error as returned to a user.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
pub enum RngError {
    /// A bit count outside `1..=8`, or a range whose upper bound is below its lower bound.
    #[display(fmt = "invalid argument")]
    InvalidArgument,
}

impl RngError {
    /// A small numeric code for the error, for targets whose only way of reporting one is
    /// blinking an LED at the user. Zero is left free for "unknown".
    pub fn code(self) -> u8 {
        match self {
            RngError::InvalidArgument => 1,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RngError {}
