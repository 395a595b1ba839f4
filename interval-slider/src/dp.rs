//! # Density-Independent Pixels (Dp)
//!
//! Configuration lengths (label padding, default thumb diameter, mark size)
//! are given in [`Dp`] and converted to physical pixels ([`Px`]) during
//! layout, using the global [`SCALE_FACTOR`].
//!
//! ```
//! use interval_slider::dp::Dp;
//!
//! let padding = Dp(5.0);
//! // 5 physical pixels unless the host installed a scale factor
//! let pixels = padding.to_px();
//! # let _ = pixels;
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::px::Px;

/// Global scale factor for converting between density-independent pixels and
/// physical pixels.
///
/// Hosts initialize it once from the display density. When it was never set,
/// conversions use `1.0`.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Installs or updates the global scale factor.
pub fn set_scale_factor(scale_factor: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(scale_factor));
    *lock.write() = scale_factor;
}

/// Density-independent pixels.
///
/// A `Dp(20.0)` thumb appears roughly the same physical size on a low-DPI
/// and a high-DPI display.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Converts to physical pixels as an `f64`.
    pub fn to_pixels_f64(&self) -> f64 {
        let scale_factor = SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0);
        self.0 * scale_factor
    }

    /// Converts to [`Px`].
    pub fn to_px(&self) -> Px {
        Px::from_dp(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests never install a scale factor, so conversions are identity.
    #[test]
    fn unscaled_conversion_is_identity() {
        assert_eq!(Dp(5.0).to_px(), Px(5));
        assert_eq!(Dp(20.0).to_pixels_f64(), 20.0);
        assert_eq!(Dp(8.0).to_pixels_f64(), 8.0);
    }

    #[test]
    fn fractional_dp_truncates() {
        assert_eq!(Dp(7.9).to_px(), Px(7));
    }
}
