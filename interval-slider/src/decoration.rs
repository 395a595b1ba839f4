//! Label and mark decorations placed above and on the track.
//!
//! Decorations are created once when the control is built and only moved by
//! later layout passes. Text shaping and drawing belong to the host; a label
//! therefore carries its already measured size.

use crate::{
    color::Color,
    dp::Dp,
    px::{PxPosition, PxRect, PxSize},
};

/// Width of a stop mark.
pub const MARK_WIDTH: Dp = Dp(1.0);
/// Height of a stop mark.
pub const MARK_HEIGHT: Dp = Dp(8.0);

/// Text rendered above a stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    frame: PxRect,
}

impl Label {
    /// Creates a label with its measured size, positioned at the origin.
    pub fn new(text: impl Into<String>, size: PxSize) -> Self {
        Self {
            text: text.into(),
            frame: PxRect::from_position_size(PxPosition::ZERO, size),
        }
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The label frame in control coordinates.
    pub fn frame(&self) -> PxRect {
        self.frame
    }

    /// The measured size.
    pub fn size(&self) -> PxSize {
        self.frame.size()
    }

    /// The label center in control coordinates.
    pub fn center(&self) -> PxPosition {
        self.frame.center()
    }

    pub(crate) fn set_frame(&mut self, frame: PxRect) {
        self.frame = frame;
    }

    /// Moves the label back to the origin, keeping its size.
    pub(crate) fn reset_origin(&mut self) {
        self.frame = PxRect::from_position_size(PxPosition::ZERO, self.frame.size());
    }
}

/// A thin tick drawn under the track at a stop position.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    frame: PxRect,
    color: Color,
}

impl Mark {
    pub(crate) fn new() -> Self {
        Self {
            frame: PxRect::from_position_size(
                PxPosition::ZERO,
                PxSize::from_dp(MARK_WIDTH, MARK_HEIGHT),
            ),
            color: Color::LIGHT_GRAY,
        }
    }

    /// The mark frame in control coordinates.
    pub fn frame(&self) -> PxRect {
        self.frame
    }

    /// The mark center in control coordinates.
    pub fn center(&self) -> PxPosition {
        self.frame.center()
    }

    /// The fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn set_center(&mut self, center: PxPosition) {
        self.frame = PxRect::centered_at(center, self.frame.size());
    }
}

impl Default for Mark {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::px::Px;

    #[test]
    fn label_keeps_size_when_reset() {
        let mut label = Label::new("Low", PxSize::new(Px(30), Px(12)));
        label.set_frame(PxRect::new(Px(40), Px(7), Px(30), Px(12)));
        label.reset_origin();
        assert_eq!(label.frame(), PxRect::new(Px(0), Px(0), Px(30), Px(12)));
        assert_eq!(label.text(), "Low");
    }

    #[test]
    fn mark_is_a_light_gray_tick() {
        let mut mark = Mark::new();
        assert_eq!(mark.frame().size(), PxSize::new(Px(1), Px(8)));
        assert_eq!(mark.color(), Color::LIGHT_GRAY);

        mark.set_center(PxPosition::new(Px(100), Px(75)));
        assert_eq!(mark.center(), PxPosition::new(Px(100), Px(75)));
        assert_eq!(mark.frame(), PxRect::new(Px(100), Px(71), Px(1), Px(8)));
    }
}
