//! Distribution parameter types.

/// Parameters of a continuous uniform distribution on `[low, high)`.
///
/// The bounds are not ordered: when `low > high` the generated values
/// simply lie in `[high, low]`. This is a documented contract, not an
/// error.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformDistribution {
    /// Lower bound (inclusive).
    pub low: f64,
    /// Upper bound (exclusive).
    pub high: f64,
}

/// Parameters of an exponential distribution.
///
/// `rate` must be a positive finite number; generation rejects anything
/// else with [`Error::NonPositiveRate`](crate::Error::NonPositiveRate).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExponentialDistribution {
    /// Rate parameter (events per unit), often written λ.
    pub rate: f64,
}

/// Parameters of a normal distribution `N(mean, std_dev²)`.
///
/// `std_dev` must be non-negative and finite; zero is allowed and yields
/// a constant sample equal to `mean`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalDistribution {
    /// Location of the distribution center.
    pub mean: f64,
    /// Spread around the center.
    pub std_dev: f64,
}

/// Enum wrapping the three supported distribution types.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distribution {
    /// A continuous uniform distribution.
    Uniform(UniformDistribution),
    /// An exponential distribution.
    Exponential(ExponentialDistribution),
    /// A normal (Gaussian) distribution.
    Normal(NormalDistribution),
}

impl Distribution {
    /// Creates a uniform distribution on `[low, high)`.
    #[must_use]
    pub fn uniform(low: f64, high: f64) -> Self {
        Self::Uniform(UniformDistribution { low, high })
    }

    /// Creates an exponential distribution with the given rate.
    #[must_use]
    pub fn exponential(rate: f64) -> Self {
        Self::Exponential(ExponentialDistribution { rate })
    }

    /// Creates a normal distribution `N(mean, std_dev²)`.
    #[must_use]
    pub fn normal(mean: f64, std_dev: f64) -> Self {
        Self::Normal(NormalDistribution { mean, std_dev })
    }

    /// Human-readable name of the distribution kind.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Uniform(_) => "uniform",
            Self::Exponential(_) => "exponential",
            Self::Normal(_) => "normal",
        }
    }
}
