//! The continuous slider the interval slider is built on.
//!
//! [`ContinuousRangeWidget`] is the capability set the control needs from a
//! platform slider: a bounded float value, range bounds, track tint, thumb
//! images per interaction state, track/thumb geometry queries, and a touch
//! acceptance policy. [`TrackSlider`](crate::TrackSlider) is a headless
//! implementation; hosts with a native slider implement the trait for it.

use crate::{
    color::Color,
    px::{PxPosition, PxRect},
    thumb::ThumbImage,
};

/// Where a touch-down may start a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchAcceptance {
    /// Anywhere on the widget, so a tap on the track moves the thumb there.
    #[default]
    Anywhere,
    /// Only on the thumb itself.
    ThumbOnly,
}

/// Interaction states that can carry their own thumb image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThumbState {
    /// At rest.
    #[default]
    Normal,
    /// While being dragged.
    Highlighted,
    /// When interaction is disabled.
    Disabled,
}

/// A continuous, bounded slider widget.
///
/// Geometry is in the widget's own coordinates except for
/// [`frame`](Self::frame), which places the widget inside the control.
pub trait ContinuousRangeWidget {
    /// The widget frame in control coordinates.
    fn frame(&self) -> PxRect;

    /// Moves and resizes the widget.
    fn set_frame(&mut self, frame: PxRect);

    /// The widget bounds in its own coordinates.
    fn bounds(&self) -> PxRect {
        self.frame().local_bounds()
    }

    /// The current logical value.
    fn value(&self) -> f32;

    /// Sets the logical value, clamped to the widget range. With `animated`
    /// the displayed thumb moves there over time; the logical value changes
    /// immediately either way.
    fn set_value(&mut self, value: f32, animated: bool);

    /// Lower bound of the value range.
    fn minimum_value(&self) -> f32;

    /// Sets the lower bound of the value range.
    fn set_minimum_value(&mut self, value: f32);

    /// Upper bound of the value range.
    fn maximum_value(&self) -> f32;

    /// Sets the upper bound of the value range.
    fn set_maximum_value(&mut self, value: f32);

    /// Sets the color of the track left of the thumb.
    fn set_minimum_track_tint_color(&mut self, color: Color);

    /// Sets (or clears) the thumb image for an interaction state.
    fn set_thumb_image(&mut self, image: Option<ThumbImage>, state: ThumbState);

    /// The thumb image for the current interaction state.
    fn current_thumb_image(&self) -> Option<&ThumbImage>;

    /// Marks the widget as tracking a touch, which selects the highlighted
    /// thumb image when one is set.
    fn set_tracking(&mut self, tracking: bool);

    /// The track rectangle for the given bounds.
    fn track_rect(&self, bounds: PxRect) -> PxRect;

    /// The thumb rectangle for the given bounds, track and value.
    fn thumb_rect(&self, bounds: PxRect, track: PxRect, value: f32) -> PxRect;

    /// The raw value whose thumb is centred closest to `point` (widget
    /// coordinates), clamped to the range.
    fn value_at(&self, point: PxPosition) -> f32;

    /// The touch acceptance policy.
    fn touch_acceptance(&self) -> TouchAcceptance;

    /// Replaces the touch acceptance policy.
    fn set_touch_acceptance(&mut self, policy: TouchAcceptance);

    /// Whether a touch-down at `point` (widget coordinates) starts tracking.
    fn begin_tracking(&self, point: PxPosition) -> bool {
        self.accepts_touch(point)
    }

    /// Whether `point` (widget coordinates) falls where the touch acceptance
    /// policy takes touches.
    fn accepts_touch(&self, point: PxPosition) -> bool {
        match self.touch_acceptance() {
            TouchAcceptance::Anywhere => self.bounds().contains(point),
            TouchAcceptance::ThumbOnly => {
                let bounds = self.bounds();
                let track = self.track_rect(bounds);
                self.thumb_rect(bounds, track, self.value()).contains(point)
            }
        }
    }
}
