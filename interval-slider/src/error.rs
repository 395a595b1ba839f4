//! Errors reported by the interval slider.

use thiserror::Error;

/// The lowest value a slider range bound may take.
pub const RANGE_FLOOR: f32 = 0.0;
/// The highest value a slider range bound may take.
pub const RANGE_CEILING: f32 = 100.0;

/// Invalid configuration directives.
///
/// These are caller bugs; construction refuses to produce a control when
/// any of them is detected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The minimum value lies outside `[0, 100]`.
    #[error("minimum value {0} must be between 0 and 100")]
    MinimumValueOutOfRange(f32),
    /// The maximum value lies outside `[0, 100]`.
    #[error("maximum value {0} must be between 0 and 100")]
    MaximumValueOutOfRange(f32),
    /// The minimum value is greater than the maximum value.
    #[error("minimum value {minimum} is greater than maximum value {maximum}")]
    InvertedRange {
        /// Configured minimum.
        minimum: f32,
        /// Configured maximum.
        maximum: f32,
    },
}

/// Errors from constructing or driving an [`IntervalSlider`](crate::IntervalSlider).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// The configuration directives were rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The control was constructed without any value entry.
    #[error("an interval slider needs at least one value entry")]
    EmptyEntries,
    /// An entry holds a NaN or infinite value.
    #[error("value entry {index} holds a non-finite value")]
    NonFiniteValue {
        /// Position of the offending entry in the supplied list.
        index: usize,
    },
    /// Two entries share an appearance value.
    #[error("appearance value {0} appears more than once in the value table")]
    DuplicateAppearanceValue(f32),
    /// Two entries share a valid value.
    #[error("valid value {0} appears more than once in the value table")]
    DuplicateValidValue(f32),
    /// A valid value passed to `set_value` is not part of the table.
    #[error("valid value {0} is not part of the value table")]
    UnknownValidValue(f32),
}
