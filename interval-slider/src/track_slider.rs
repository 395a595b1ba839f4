//! A headless continuous slider.
//!
//! `TrackSlider` keeps a logical value, a displayed value that follows it
//! through animated seeks, and the track/thumb geometry of a horizontal
//! slider: a thin track spanning the full width, and a thumb that travels
//! `track width - thumb width` pixels, vertically centred in the bounds.

use std::time::Duration;

use crate::{
    animation::SeekAnimation,
    color::Color,
    dp::Dp,
    px::{Px, PxPosition, PxRect, PxSize},
    thumb::{DEFAULT_THUMB_DIAMETER, ThumbImage},
    widget::{ContinuousRangeWidget, ThumbState, TouchAcceptance},
};

/// Height of the track line.
pub const TRACK_HEIGHT: Dp = Dp(4.0);

/// Headless implementation of [`ContinuousRangeWidget`].
#[derive(Debug, Clone)]
pub struct TrackSlider {
    frame: PxRect,
    value: f32,
    minimum_value: f32,
    maximum_value: f32,
    minimum_track_tint_color: Color,
    thumb_images: [Option<ThumbImage>; 3],
    tracking: bool,
    enabled: bool,
    touch_acceptance: TouchAcceptance,
    seek: Option<SeekAnimation>,
}

impl Default for TrackSlider {
    fn default() -> Self {
        Self {
            frame: PxRect::ZERO,
            value: 0.0,
            minimum_value: 0.0,
            maximum_value: 1.0,
            minimum_track_tint_color: Color::BLUE,
            thumb_images: [None, None, None],
            tracking: false,
            enabled: true,
            touch_acceptance: TouchAcceptance::ThumbOnly,
            seek: None,
        }
    }
}

fn slot(state: ThumbState) -> usize {
    match state {
        ThumbState::Normal => 0,
        ThumbState::Highlighted => 1,
        ThumbState::Disabled => 2,
    }
}

impl TrackSlider {
    /// Creates a slider with the given frame and a `[0, 1]` range.
    pub fn new(frame: PxRect) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    /// The value currently drawn, which lags the logical value while a seek
    /// is animating.
    pub fn displayed_value(&self) -> f32 {
        match self.seek {
            Some(seek) if seek.target() == self.value => seek.value(),
            _ => self.value,
        }
    }

    /// Whether an animated seek is still moving the displayed thumb.
    pub fn is_animating(&self) -> bool {
        self.seek
            .is_some_and(|seek| seek.target() == self.value && !seek.is_finished())
    }

    /// Advances the seek animation by `dt`. Returns `true` while the
    /// displayed value is still moving and `false` once it has settled.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(seek) = self.seek.as_mut() else {
            return false;
        };
        if seek.target() != self.value {
            self.seek = None;
            return false;
        }
        seek.advance(dt);
        if seek.is_finished() {
            self.seek = None;
            return false;
        }
        true
    }

    /// The minimum track tint.
    pub fn minimum_track_tint_color(&self) -> Color {
        self.minimum_track_tint_color
    }

    /// The thumb image configured for `state`, without fallback.
    pub fn thumb_image(&self, state: ThumbState) -> Option<&ThumbImage> {
        self.thumb_images[slot(state)].as_ref()
    }

    /// Whether the slider accepts interaction.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables interaction.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.tracking = false;
        }
    }

    /// Whether a touch is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    fn thumb_size(&self) -> PxSize {
        self.current_thumb_image()
            .map(ThumbImage::size)
            .unwrap_or_else(|| PxSize::from_dp(DEFAULT_THUMB_DIAMETER, DEFAULT_THUMB_DIAMETER))
    }

    fn clamp_value(&self, value: f32) -> f32 {
        if self.maximum_value <= self.minimum_value {
            return self.minimum_value;
        }
        value.clamp(self.minimum_value, self.maximum_value)
    }

    fn fraction_of(&self, value: f32) -> f32 {
        let span = self.maximum_value - self.minimum_value;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.minimum_value) / span).clamp(0.0, 1.0)
    }

    fn travel(&self, track: PxRect) -> Px {
        Px((track.width - self.thumb_size().width).0.max(0))
    }
}

impl ContinuousRangeWidget for TrackSlider {
    fn frame(&self) -> PxRect {
        self.frame
    }

    fn set_frame(&mut self, frame: PxRect) {
        self.frame = frame;
    }

    fn value(&self) -> f32 {
        self.value
    }

    fn set_value(&mut self, value: f32, animated: bool) {
        let target = self.clamp_value(value);
        if animated {
            self.seek = Some(SeekAnimation::new(self.displayed_value(), target));
        }
        self.value = target;
    }

    fn minimum_value(&self) -> f32 {
        self.minimum_value
    }

    fn set_minimum_value(&mut self, value: f32) {
        self.minimum_value = value;
        self.value = self.clamp_value(self.value);
    }

    fn maximum_value(&self) -> f32 {
        self.maximum_value
    }

    fn set_maximum_value(&mut self, value: f32) {
        self.maximum_value = value;
        self.value = self.clamp_value(self.value);
    }

    fn set_minimum_track_tint_color(&mut self, color: Color) {
        self.minimum_track_tint_color = color;
    }

    fn set_thumb_image(&mut self, image: Option<ThumbImage>, state: ThumbState) {
        self.thumb_images[slot(state)] = image;
    }

    fn current_thumb_image(&self) -> Option<&ThumbImage> {
        let state = if !self.enabled {
            ThumbState::Disabled
        } else if self.tracking {
            ThumbState::Highlighted
        } else {
            ThumbState::Normal
        };
        self.thumb_image(state)
            .or_else(|| self.thumb_image(ThumbState::Normal))
    }

    fn set_tracking(&mut self, tracking: bool) {
        self.tracking = tracking && self.enabled;
    }

    fn track_rect(&self, bounds: PxRect) -> PxRect {
        let height = Px(TRACK_HEIGHT.to_px().0.min(bounds.height.0.max(0)));
        PxRect::new(
            bounds.x,
            bounds.y + (bounds.height - height).half(),
            bounds.width,
            height,
        )
    }

    fn thumb_rect(&self, bounds: PxRect, track: PxRect, value: f32) -> PxRect {
        let size = self.thumb_size();
        let offset = (self.travel(track).to_f32() * self.fraction_of(value)).round();
        PxRect::new(
            track.x + Px::saturating_from_f32(offset),
            bounds.y + (bounds.height - size.height).half(),
            size.width,
            size.height,
        )
    }

    fn value_at(&self, point: PxPosition) -> f32 {
        let track = self.track_rect(self.bounds());
        let travel = self.travel(track);
        if travel.0 <= 0 {
            return self.minimum_value;
        }
        let start = track.x + self.thumb_size().width.half();
        let fraction = ((point.x - start).to_f32() / travel.to_f32()).clamp(0.0, 1.0);
        self.clamp_value(self.minimum_value + fraction * (self.maximum_value - self.minimum_value))
    }

    fn touch_acceptance(&self) -> TouchAcceptance {
        self.touch_acceptance
    }

    fn set_touch_acceptance(&mut self, policy: TouchAcceptance) {
        self.touch_acceptance = policy;
    }

    fn begin_tracking(&self, point: PxPosition) -> bool {
        self.enabled && self.accepts_touch(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider() -> TrackSlider {
        let mut slider = TrackSlider::new(PxRect::new(Px(0), Px(50), Px(220), Px(50)));
        slider.set_maximum_value(100.0);
        slider.set_thumb_image(Some(ThumbImage::default_round()), ThumbState::Normal);
        slider
    }

    #[test]
    fn track_spans_width_and_is_centred() {
        let slider = slider();
        let track = slider.track_rect(slider.bounds());
        assert_eq!(track, PxRect::new(Px(0), Px(23), Px(220), Px(4)));
    }

    #[test]
    fn thumb_travels_track_minus_thumb_width() {
        let slider = slider();
        let bounds = slider.bounds();
        let track = slider.track_rect(bounds);
        assert_eq!(
            slider.thumb_rect(bounds, track, 0.0),
            PxRect::new(Px(0), Px(15), Px(20), Px(20))
        );
        assert_eq!(slider.thumb_rect(bounds, track, 50.0).x, Px(100));
        assert_eq!(slider.thumb_rect(bounds, track, 100.0).x, Px(200));
        // Out-of-range values pin to the ends.
        assert_eq!(slider.thumb_rect(bounds, track, 140.0).x, Px(200));
    }

    #[test]
    fn value_at_inverts_thumb_centre() {
        let slider = slider();
        assert_eq!(slider.value_at(PxPosition::new(Px(110), Px(25))), 50.0);
        assert_eq!(slider.value_at(PxPosition::new(Px(0), Px(25))), 0.0);
        assert_eq!(slider.value_at(PxPosition::new(Px(500), Px(25))), 100.0);
    }

    #[test]
    fn values_clamp_to_range() {
        let mut slider = slider();
        slider.set_minimum_value(10.0);
        slider.set_value(3.0, false);
        assert_eq!(slider.value(), 10.0);
        slider.set_value(300.0, true);
        assert_eq!(slider.value(), 100.0);
    }

    #[test]
    fn animated_seek_updates_logical_value_immediately() {
        let mut slider = slider();
        slider.set_value(80.0, true);
        assert_eq!(slider.value(), 80.0);
        assert_eq!(slider.displayed_value(), 0.0);
        assert!(slider.is_animating());

        assert!(slider.advance(Duration::from_millis(100)));
        assert!(!slider.advance(Duration::from_secs(1)));
        assert_eq!(slider.displayed_value(), 80.0);
        assert!(!slider.is_animating());
    }

    #[test]
    fn direct_set_and_restore_keeps_seek_running() {
        let mut slider = slider();
        slider.set_value(80.0, true);
        slider.advance(Duration::from_millis(100));
        let shown = slider.displayed_value();

        slider.set_value(20.0, false);
        assert_eq!(slider.displayed_value(), 20.0);
        slider.set_value(80.0, false);

        assert_eq!(slider.displayed_value(), shown);
        assert!(slider.is_animating());
    }

    #[test]
    fn touch_acceptance_policies() {
        let mut slider = slider();
        let on_track = PxPosition::new(Px(150), Px(25));
        let on_thumb = PxPosition::new(Px(5), Px(25));

        slider.set_touch_acceptance(TouchAcceptance::ThumbOnly);
        assert!(!slider.begin_tracking(on_track));
        assert!(slider.begin_tracking(on_thumb));

        slider.set_touch_acceptance(TouchAcceptance::Anywhere);
        assert!(slider.begin_tracking(on_track));
        assert!(!slider.begin_tracking(PxPosition::new(Px(150), Px(60))));

        slider.set_enabled(false);
        assert!(slider.accepts_touch(on_track));
        assert!(!slider.begin_tracking(on_track));

        slider.set_touch_acceptance(TouchAcceptance::ThumbOnly);
        assert!(slider.accepts_touch(on_thumb));
        assert!(!slider.begin_tracking(on_thumb));
    }

    #[test]
    fn thumb_image_follows_interaction_state() {
        let mut slider = slider();
        let highlighted = ThumbImage::round(Dp(30.0), Color::BLUE);
        slider.set_thumb_image(Some(highlighted.clone()), ThumbState::Highlighted);

        assert_eq!(
            slider.current_thumb_image().map(ThumbImage::size),
            Some(PxSize::new(Px(20), Px(20)))
        );
        slider.set_tracking(true);
        assert_eq!(slider.current_thumb_image(), Some(&highlighted));

        // Disabled falls back to the normal image when none is set.
        slider.set_enabled(false);
        assert_eq!(
            slider.current_thumb_image().map(ThumbImage::size),
            Some(PxSize::new(Px(20), Px(20)))
        );
    }
}
