#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when an exponential rate is zero, negative, or not finite.
    #[error("invalid rate: {rate} must be a positive finite number")]
    NonPositiveRate {
        /// The rejected rate value.
        rate: f64,
    },

    /// Returned when a normal standard deviation is negative or not finite.
    #[error("invalid standard deviation: {std_dev} must be non-negative and finite")]
    NegativeStdDev {
        /// The rejected standard deviation value.
        std_dev: f64,
    },

    /// Returned when a histogram is requested over an empty sample.
    #[error("histogram requires at least one sample value")]
    EmptySample,

    /// Returned when a histogram is requested with zero bins.
    #[error("histogram requires at least one bin")]
    ZeroBins,
}

pub type Result<T> = core::result::Result<T, Error>;
