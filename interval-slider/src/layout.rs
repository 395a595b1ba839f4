//! Layout pass of the interval slider.
//!
//! The slider occupies the lower half of the control. Every stop's label sits
//! above the slider, horizontally centred on the stop's anchor; every mark is
//! centred on the anchor itself.

use tracing::debug;

use crate::{
    dp::Dp,
    geometry::GeometryMapper,
    px::{Px, PxRect, PxSize},
    table::ValueTable,
    widget::ContinuousRangeWidget,
};

/// The slider frame for a control of the given size: full width, lower half.
///
/// For an odd height the extra row goes to the slider, so the frame always
/// reaches the control's bottom edge.
pub fn slider_frame(size: PxSize) -> PxRect {
    let top = size.height.half();
    PxRect::new(Px::ZERO, top, size.width, size.height - top)
}

/// Repositions the slider and every stop decoration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    label_bottom_padding: Dp,
}

impl LayoutEngine {
    /// Creates an engine leaving `label_bottom_padding` between each label's
    /// bottom edge and the slider's top edge.
    pub fn new(label_bottom_padding: Dp) -> Self {
        Self {
            label_bottom_padding,
        }
    }

    /// Runs one layout pass for a control of `size`.
    ///
    /// Decorations are only moved, never recreated, and the widget value is
    /// left untouched. Running the pass twice with the same size yields the
    /// same frames.
    pub fn layout<W>(&self, size: PxSize, widget: &mut W, table: &mut ValueTable)
    where
        W: ContinuousRangeWidget + ?Sized,
    {
        let frame = slider_frame(size);
        widget.set_frame(frame);

        let padding = self.label_bottom_padding.to_px();
        let mut mapper = GeometryMapper::new(widget);
        for stop in table.stops_mut() {
            let anchor = mapper.anchor_for(stop.appearance_value());
            if let Some(label) = stop.label_mut() {
                let label_size = label.size();
                label.set_frame(PxRect::new(
                    anchor.x - label_size.width.half(),
                    frame.y - (label_size.height + padding),
                    label_size.width,
                    label_size.height,
                ));
            }
            if let Some(mark) = stop.mark_mut() {
                mark.set_center(anchor);
            }
        }
        debug!(
            "Laid out interval slider at {size:?}: slider frame {frame:?}, {} stops",
            table.len()
        );
    }
}
