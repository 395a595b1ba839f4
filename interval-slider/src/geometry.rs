//! Mapping stop positions to points in control coordinates.

use tracing::trace;

use crate::{
    px::PxPosition,
    thumb::ThumbImage,
    widget::ContinuousRangeWidget,
};

/// Measures where the thumb's visual centre lands for a given value.
///
/// Measuring moves the widget to the value, reads its geometry and moves it
/// back, all without animation. The widget is borrowed mutably for the whole
/// measurement, so no other reader can observe the intermediate value.
pub struct GeometryMapper<'a, W: ContinuousRangeWidget + ?Sized> {
    widget: &'a mut W,
}

impl<'a, W: ContinuousRangeWidget + ?Sized> GeometryMapper<'a, W> {
    /// Borrows the widget for a series of measurements.
    pub fn new(widget: &'a mut W) -> Self {
        Self { widget }
    }

    /// The point a label or mark for `appearance_value` is centred on.
    ///
    /// The thumb rectangle is reported for the current thumb image, so the
    /// centre is offset by half the image size rather than half the rect.
    /// Falls back to the rect size when the widget has no thumb image.
    pub fn anchor_for(&mut self, appearance_value: f32) -> PxPosition {
        let origin_value = self.widget.value();
        self.widget.set_value(appearance_value, false);

        let bounds = self.widget.bounds();
        let track = self.widget.track_rect(bounds);
        let thumb = self.widget.thumb_rect(bounds, track, self.widget.value());

        self.widget.set_value(origin_value, false);

        let thumb_size = self
            .widget
            .current_thumb_image()
            .map(ThumbImage::size)
            .unwrap_or_else(|| thumb.size());
        let frame = self.widget.frame();
        let anchor = PxPosition::new(
            frame.x + thumb.x + thumb_size.width.half(),
            frame.y + thumb.y + thumb_size.height.half(),
        );
        trace!("Anchor for appearance value {appearance_value}: {anchor:?}");
        anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::Color,
        dp::Dp,
        px::{Px, PxRect},
        track_slider::TrackSlider,
        widget::ThumbState,
    };

    fn slider() -> TrackSlider {
        let mut slider = TrackSlider::new(PxRect::new(Px(0), Px(50), Px(220), Px(50)));
        slider.set_maximum_value(100.0);
        slider.set_thumb_image(Some(ThumbImage::default_round()), ThumbState::Normal);
        slider
    }

    #[test]
    fn anchor_is_thumb_centre_in_control_coordinates() {
        let mut slider = slider();
        let mut mapper = GeometryMapper::new(&mut slider);
        assert_eq!(mapper.anchor_for(0.0), PxPosition::new(Px(10), Px(75)));
        assert_eq!(mapper.anchor_for(50.0), PxPosition::new(Px(110), Px(75)));
        assert_eq!(mapper.anchor_for(100.0), PxPosition::new(Px(210), Px(75)));
    }

    #[test]
    fn measurement_restores_value() {
        let mut slider = slider();
        slider.set_value(37.5, false);
        for value in [0.0, 100.0, 12.0, 37.5, -40.0] {
            GeometryMapper::new(&mut slider).anchor_for(value);
            assert_eq!(slider.value(), 37.5);
        }
    }

    #[test]
    fn asymmetric_thumb_uses_image_dimensions() {
        let mut slider = slider();
        slider.set_thumb_image(
            Some(ThumbImage::rounded_rect(30, 10, 0.0, Color::WHITE)),
            ThumbState::Normal,
        );
        let anchor = GeometryMapper::new(&mut slider).anchor_for(0.0);
        // Thumb rect (0, 20, 30, 10) inside a frame at y = 50.
        assert_eq!(anchor, PxPosition::new(Px(15), Px(75)));
    }

    #[test]
    fn missing_thumb_image_uses_rect_size() {
        let mut slider = TrackSlider::new(PxRect::new(Px(0), Px(0), Px(120), Px(40)));
        slider.set_maximum_value(100.0);
        let anchor = GeometryMapper::new(&mut slider).anchor_for(100.0);
        let side = Dp(20.0).to_px();
        assert_eq!(anchor, PxPosition::new(Px(120) - side.half(), Px(20)));
    }
}
