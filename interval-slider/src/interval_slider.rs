//! The interval slider control.
//!
//! ## Usage
//!
//! Build the control from its bounds, an ordered list of stops and optional
//! configuration directives, then feed it touches and read its value.
//!
//! ```
//! use interval_slider::{
//!     IntervalSlider, Label, Px, PxPosition, PxRect, PxSize, SliderOption, ValueEntry,
//! };
//!
//! let label = |text: &str| Label::new(text, PxSize::new(Px(24), Px(12)));
//! let mut slider = IntervalSlider::new(
//!     PxRect::new(Px(0), Px(0), Px(220), Px(100)),
//!     vec![
//!         ValueEntry::new(1.0, 0.0).with_label(label("1x")),
//!         ValueEntry::new(2.0, 50.0).with_label(label("2x")),
//!         ValueEntry::new(4.0, 100.0).with_label(label("4x")),
//!     ],
//!     &[SliderOption::AddMark(true)],
//! )
//! .unwrap();
//! slider.set_on_confirm(|value: f32| println!("confirmed {value}"));
//!
//! // A tap near the right end snaps to the last stop.
//! slider.touch_down(PxPosition::new(Px(190), Px(75)));
//! slider.touch_up(PxPosition::new(Px(190), Px(75)));
//! assert_eq!(slider.value(), 4.0);
//! ```

use tracing::{debug, warn};

use crate::{
    error::SliderError,
    layout::{LayoutEngine, slider_frame},
    options::{SliderConfig, SliderOption},
    prop::CallbackWith,
    px::{PxPosition, PxRect},
    table::{Stop, ValueEntry, ValueTable},
    thumb::ThumbImage,
    track_slider::TrackSlider,
    widget::{ContinuousRangeWidget, ThumbState, TouchAcceptance},
};

/// Where the control is in its interaction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Resting on a stop.
    #[default]
    Idle,
    /// A touch is moving the thumb; the widget value is raw, not snapped.
    Dragging,
}

/// A slider that snaps to a fixed, ordered set of stops.
///
/// The control owns the underlying continuous widget, the stop table with its
/// labels and marks, and the resolved configuration. The selected stop is
/// tracked by index, so [`value`](Self::value) always returns a valid value
/// from the table.
pub struct IntervalSlider<W: ContinuousRangeWidget = TrackSlider> {
    bounds: PxRect,
    widget: W,
    table: ValueTable,
    config: SliderConfig,
    layout: LayoutEngine,
    selected: usize,
    interaction: InteractionState,
    on_confirm: Option<CallbackWith<f32>>,
}

impl IntervalSlider<TrackSlider> {
    /// Builds a control on top of a headless [`TrackSlider`].
    pub fn new(
        bounds: PxRect,
        entries: Vec<ValueEntry>,
        options: &[SliderOption],
    ) -> Result<Self, SliderError> {
        Self::with_widget(TrackSlider::default(), bounds, entries, options)
    }
}

impl<W: ContinuousRangeWidget> IntervalSlider<W> {
    /// Builds a control on top of `widget`.
    ///
    /// Fails without producing a control when the entry list is empty or
    /// holds duplicated or non-finite values, or when a range bound lies
    /// outside `[0, 100]`.
    pub fn with_widget(
        widget: W,
        bounds: PxRect,
        entries: Vec<ValueEntry>,
        options: &[SliderOption],
    ) -> Result<Self, SliderError> {
        let config = SliderConfig::from_options(options).inspect_err(|err| {
            warn!("Rejecting interval slider configuration: {err}");
        })?;
        Self::with_config(widget, bounds, entries, config)
    }

    /// Builds a control from an already assembled configuration.
    pub fn with_config(
        mut widget: W,
        bounds: PxRect,
        entries: Vec<ValueEntry>,
        config: SliderConfig,
    ) -> Result<Self, SliderError> {
        config.validate()?;
        let mut table = ValueTable::new(entries)?;
        if config.add_mark {
            table.attach_marks();
        }

        widget.set_frame(slider_frame(bounds.size()));
        widget.set_thumb_image(Some(config.resolved_thumb_image()), ThumbState::Normal);
        widget.set_minimum_value(config.minimum_value);
        widget.set_maximum_value(config.maximum_value);
        widget.set_minimum_track_tint_color(config.minimum_track_tint_color);
        widget.set_touch_acceptance(TouchAcceptance::Anywhere);

        let mut slider = Self {
            bounds,
            widget,
            table,
            layout: LayoutEngine::new(config.label_bottom_padding),
            config,
            selected: 0,
            interaction: InteractionState::Idle,
            on_confirm: None,
        };
        let initial = slider.table.nearest_index(slider.config.default_value);
        slider.seek(initial);
        slider.layout();
        debug!(
            "Built interval slider with {} stops, initial value {}",
            slider.table.len(),
            slider.value()
        );
        Ok(slider)
    }

    /// The valid value of the selected stop.
    pub fn value(&self) -> f32 {
        self.selected_stop().valid_value()
    }

    /// The selected stop.
    pub fn selected_stop(&self) -> &Stop {
        &self.table.stops()[self.selected]
    }

    /// Index of the selected stop.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Animates to the stop holding exactly `valid_value`.
    ///
    /// Values outside the table are rejected and leave the control untouched.
    pub fn set_value(&mut self, valid_value: f32) -> Result<(), SliderError> {
        let Some(index) = self.table.index_of_valid_value(valid_value) else {
            warn!("Ignoring unknown interval slider value {valid_value}");
            return Err(SliderError::UnknownValidValue(valid_value));
        };
        self.seek(index);
        Ok(())
    }

    /// Animates to the stop whose valid value is closest to `valid_value`
    /// and returns that stop's valid value.
    pub fn set_value_nearest(&mut self, valid_value: f32) -> f32 {
        let index = self.table.nearest_valid_index(valid_value);
        self.seek(index);
        self.value()
    }

    /// Ends a drag at `raw_value`: snaps to the nearest stop, animates there,
    /// notifies the confirm callback and returns the confirmed valid value.
    pub fn on_drag_end(&mut self, raw_value: f32) -> f32 {
        let index = self.table.nearest_index(raw_value);
        self.seek(index);
        self.interaction = InteractionState::Idle;
        self.widget.set_tracking(false);

        let value = self.value();
        debug!("Drag ended at {raw_value}, confirmed value {value}");
        if let Some(on_confirm) = self.on_confirm.as_ref() {
            on_confirm.call(value);
        }
        value
    }

    /// Starts a drag at `point` (control coordinates) if the widget accepts
    /// the touch there. The widget value jumps to the raw value under the
    /// touch; it is snapped when the touch ends.
    pub fn touch_down(&mut self, point: PxPosition) -> bool {
        let local = self.to_widget(point);
        if !self.widget.begin_tracking(local) {
            return false;
        }
        self.interaction = InteractionState::Dragging;
        self.widget.set_tracking(true);
        let raw = self.widget.value_at(local);
        self.widget.set_value(raw, false);
        true
    }

    /// Moves an ongoing drag to `point` (control coordinates). Ignored while
    /// idle.
    pub fn drag_to(&mut self, point: PxPosition) {
        if self.interaction != InteractionState::Dragging {
            return;
        }
        let raw = self.widget.value_at(self.to_widget(point));
        self.widget.set_value(raw, false);
    }

    /// Ends an ongoing drag, wherever the touch was lifted, and returns the
    /// confirmed valid value. Returns `None` while idle.
    pub fn touch_up(&mut self, point: PxPosition) -> Option<f32> {
        if self.interaction != InteractionState::Dragging {
            return None;
        }
        self.drag_to(point);
        let raw = self.widget.value();
        Some(self.on_drag_end(raw))
    }

    /// Where the control is in its interaction cycle.
    pub fn interaction_state(&self) -> InteractionState {
        self.interaction
    }

    /// Sets the callback invoked once per completed drag with the confirmed
    /// valid value.
    pub fn set_on_confirm(&mut self, on_confirm: impl Into<CallbackWith<f32>>) {
        self.on_confirm = Some(on_confirm.into());
    }

    /// Removes the confirm callback.
    pub fn clear_on_confirm(&mut self) {
        self.on_confirm = None;
    }

    /// Replaces the thumb image for `state` on the underlying widget and
    /// relays out, since anchors depend on the thumb size.
    pub fn set_thumb_image(&mut self, image: Option<ThumbImage>, state: ThumbState) {
        self.widget.set_thumb_image(image, state);
        self.layout();
    }

    /// Moves or resizes the control and runs a layout pass.
    pub fn resize(&mut self, bounds: PxRect) {
        self.bounds = bounds;
        self.layout();
    }

    /// Repositions the slider, labels and marks for the current bounds.
    pub fn layout(&mut self) {
        self.layout
            .layout(self.bounds.size(), &mut self.widget, &mut self.table);
    }

    /// The control bounds.
    pub fn bounds(&self) -> PxRect {
        self.bounds
    }

    /// The stop table, with laid-out decorations.
    pub fn table(&self) -> &ValueTable {
        &self.table
    }

    /// The resolved configuration.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The underlying widget.
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// The underlying widget, e.g. to advance its animations.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    fn seek(&mut self, index: usize) {
        self.selected = index;
        let appearance_value = self.table.stops()[index].appearance_value();
        self.widget.set_value(appearance_value, true);
        debug!("Seeking to stop {index} at appearance value {appearance_value}");
    }

    fn to_widget(&self, point: PxPosition) -> PxPosition {
        point - self.widget.frame().origin()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::*;
    use crate::{
        decoration::Label,
        error::ConfigError,
        px::{Px, PxSize},
    };

    fn bounds() -> PxRect {
        PxRect::new(Px(0), Px(0), Px(220), Px(100))
    }

    fn entries() -> Vec<ValueEntry> {
        let label = |text: &str| Label::new(text, PxSize::new(Px(20), Px(12)));
        vec![
            ValueEntry::new(10.0, 0.0).with_label(label("10")),
            ValueEntry::new(20.0, 50.0).with_label(label("20")),
            ValueEntry::new(30.0, 100.0).with_label(label("30")),
        ]
    }

    fn slider(options: &[SliderOption]) -> IntervalSlider {
        IntervalSlider::new(bounds(), entries(), options).unwrap()
    }

    #[test]
    fn construction_snaps_default_value() {
        assert_eq!(slider(&[]).value(), 10.0);
        let slider = slider(&[SliderOption::DefaultValue(60.0)]);
        assert_eq!(slider.value(), 20.0);
        assert_eq!(slider.widget().value(), 50.0);
        assert!(slider.widget().is_animating());
    }

    #[test]
    fn construction_configures_widget() {
        let slider = slider(&[
            SliderOption::MinimumValue(0.0),
            SliderOption::MaximumValue(100.0),
        ]);
        let widget = slider.widget();
        assert_eq!(widget.frame(), PxRect::new(Px(0), Px(50), Px(220), Px(50)));
        assert_eq!(widget.maximum_value(), 100.0);
        assert_eq!(widget.touch_acceptance(), TouchAcceptance::Anywhere);
        assert_eq!(
            widget.current_thumb_image(),
            Some(&ThumbImage::default_round())
        );
    }

    #[test]
    fn construction_rejects_bad_input() {
        assert!(matches!(
            IntervalSlider::new(bounds(), entries(), &[SliderOption::MinimumValue(-5.0)]),
            Err(SliderError::Config(ConfigError::MinimumValueOutOfRange(_)))
        ));
        assert!(matches!(
            IntervalSlider::new(bounds(), entries(), &[SliderOption::MaximumValue(150.0)]),
            Err(SliderError::Config(ConfigError::MaximumValueOutOfRange(_)))
        ));
        assert!(matches!(
            IntervalSlider::new(bounds(), Vec::new(), &[]),
            Err(SliderError::EmptyEntries)
        ));
    }

    #[test]
    fn construction_rejects_overridden_out_of_range_bounds() {
        let result = IntervalSlider::new(
            bounds(),
            entries(),
            &[
                SliderOption::MinimumValue(-5.0),
                SliderOption::MinimumValue(10.0),
                SliderOption::MaximumValue(150.0),
                SliderOption::MaximumValue(90.0),
            ],
        );
        assert!(matches!(
            result,
            Err(SliderError::Config(ConfigError::MinimumValueOutOfRange(v))) if v == -5.0
        ));
    }

    #[test]
    fn drag_end_snaps_and_notifies_once() {
        let mut slider = slider(&[]);
        let confirmed = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&confirmed);
        slider.set_on_confirm(move |value: f32| sink.lock().unwrap().push(value));

        assert_eq!(slider.on_drag_end(24.0), 10.0);
        assert_eq!(slider.on_drag_end(25.0), 10.0);
        assert_eq!(slider.on_drag_end(26.0), 20.0);
        assert_eq!(slider.widget().value(), 50.0);

        assert_eq!(*confirmed.lock().unwrap(), vec![10.0, 10.0, 20.0]);
    }

    #[test]
    fn set_value_round_trips() {
        let mut slider = slider(&[]);
        for value in [30.0, 10.0, 20.0] {
            slider.set_value(value).unwrap();
            assert_eq!(slider.value(), value);
        }
    }

    #[test]
    fn unknown_value_is_rejected_without_side_effects() {
        let mut slider = slider(&[]);
        slider.set_value(20.0).unwrap();
        assert_eq!(
            slider.set_value(25.0),
            Err(SliderError::UnknownValidValue(25.0))
        );
        assert_eq!(slider.value(), 20.0);
        assert_eq!(slider.widget().value(), 50.0);
    }

    #[test]
    fn set_value_nearest_adjusts_to_table() {
        let mut slider = slider(&[]);
        assert_eq!(slider.set_value_nearest(27.0), 30.0);
        assert_eq!(slider.set_value_nearest(15.0), 10.0);
        assert_eq!(slider.value(), 10.0);
    }

    #[test]
    fn tap_anywhere_on_track_snaps() {
        let mut slider = slider(&[]);
        let point = PxPosition::new(Px(150), Px(75));

        assert!(slider.touch_down(point));
        assert_eq!(slider.interaction_state(), InteractionState::Dragging);
        assert!(slider.widget().is_tracking());

        assert_eq!(slider.touch_up(point), Some(20.0));
        assert_eq!(slider.interaction_state(), InteractionState::Idle);
        assert!(!slider.widget().is_tracking());
    }

    #[test]
    fn drag_stays_raw_until_release() {
        let mut slider = slider(&[]);
        slider.touch_down(PxPosition::new(Px(10), Px(75)));
        slider.drag_to(PxPosition::new(Px(170), Px(75)));
        assert_eq!(slider.widget().value(), 80.0);
        assert_eq!(slider.value(), 10.0);

        // Release outside the control behaves like release inside.
        assert_eq!(slider.touch_up(PxPosition::new(Px(400), Px(-30))), Some(30.0));
        assert_eq!(slider.widget().value(), 100.0);
    }

    #[test]
    fn touch_up_while_idle_is_ignored() {
        let mut slider = slider(&[]);
        slider.drag_to(PxPosition::new(Px(170), Px(75)));
        assert_eq!(slider.touch_up(PxPosition::new(Px(170), Px(75))), None);
        assert_eq!(slider.value(), 10.0);
    }

    #[test]
    fn touches_outside_slider_are_refused() {
        let mut slider = slider(&[]);
        assert!(!slider.touch_down(PxPosition::new(Px(100), Px(20))));
        assert_eq!(slider.interaction_state(), InteractionState::Idle);
    }

    #[test]
    fn layout_places_labels_on_anchors() {
        let slider = slider(&[SliderOption::AddMark(true)]);
        for stop in slider.table() {
            let label = stop.label().unwrap();
            let mark = stop.mark().unwrap();
            assert_eq!(label.center().x, mark.center().x);
            assert_eq!(label.frame().max_y(), Px(45));
        }
    }

    #[test]
    fn resize_relays_out() {
        let mut slider = slider(&[SliderOption::AddMark(true)]);
        slider.resize(PxRect::new(Px(0), Px(0), Px(420), Px(60)));
        let last = &slider.table().stops()[2];
        assert_eq!(last.mark().unwrap().center(), PxPosition::new(Px(410), Px(45)));
        assert_eq!(slider.widget().frame(), PxRect::new(Px(0), Px(30), Px(420), Px(30)));
    }

    #[test]
    fn thumb_image_change_moves_anchors() {
        let mut slider = slider(&[SliderOption::AddMark(true)]);
        slider.set_thumb_image(
            Some(ThumbImage::rounded_rect(40, 40, 20.0, crate::Color::WHITE)),
            ThumbState::Normal,
        );
        let first = &slider.table().stops()[0];
        assert_eq!(first.mark().unwrap().center().x, Px(20));
    }

    #[test]
    fn seek_animation_settles_on_selected_stop() {
        let mut slider = slider(&[]);
        slider.set_value(30.0).unwrap();
        while slider.widget_mut().advance(Duration::from_millis(16)) {}
        assert_eq!(slider.widget().displayed_value(), 100.0);
        assert_eq!(slider.value(), 30.0);
    }

    #[test]
    fn clamped_range_keeps_index_selection() {
        // The widget range cuts off the first stop's appearance value, yet
        // the selected valid value stays exact.
        let mut slider = slider(&[SliderOption::MinimumValue(20.0)]);
        assert_eq!(slider.value(), 10.0);
        assert_eq!(slider.widget().value(), 20.0);
        slider.set_value(20.0).unwrap();
        assert_eq!(slider.value(), 20.0);
    }
}
