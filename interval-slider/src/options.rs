//! Configuration of an interval slider.
//!
//! ## Usage
//!
//! Either build a [`SliderConfig`] with its setters, or describe it as a list
//! of [`SliderOption`] directives applied in order onto the defaults.
//!
//! ```
//! use interval_slider::{Dp, SliderConfig, SliderOption};
//!
//! let from_options = SliderConfig::from_options(&[
//!     SliderOption::MaximumValue(80.0),
//!     SliderOption::AddMark(true),
//!     SliderOption::LabelBottomPadding(Dp(8.0)),
//! ])
//! .unwrap();
//!
//! let built = SliderConfig::default()
//!     .maximum_value(80.0)
//!     .add_mark(true)
//!     .label_bottom_padding(Dp(8.0));
//!
//! assert_eq!(from_options, built);
//! ```

use derive_setters::Setters;

use crate::{
    color::Color,
    dp::Dp,
    error::{ConfigError, RANGE_CEILING, RANGE_FLOOR},
    thumb::ThumbImage,
};

/// A single configuration directive. Each kind sets exactly one field of
/// [`SliderConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum SliderOption {
    /// Color of the track left of the thumb.
    MinimumTrackTintColor(Color),
    /// Lower bound of the slider range, within `[0, 100]`.
    MinimumValue(f32),
    /// Upper bound of the slider range, within `[0, 100]`.
    MaximumValue(f32),
    /// Gap between a label's bottom edge and the slider's top edge.
    LabelBottomPadding(Dp),
    /// Initial position; snapped to the nearest stop.
    DefaultValue(f32),
    /// Whether to draw a mark at every stop.
    AddMark(bool),
    /// Thumb image replacing the default round thumb.
    ThumbImage(ThumbImage),
}

/// Resolved configuration of an interval slider.
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct SliderConfig {
    /// Color of the track left of the thumb.
    pub minimum_track_tint_color: Color,
    /// Lower bound of the slider range, within `[0, 100]`.
    pub minimum_value: f32,
    /// Upper bound of the slider range, within `[0, 100]`.
    pub maximum_value: f32,
    /// Gap between a label's bottom edge and the slider's top edge.
    pub label_bottom_padding: Dp,
    /// Initial position as an appearance value; snapped to the nearest stop.
    pub default_value: f32,
    /// Whether to draw a mark at every stop.
    pub add_mark: bool,
    /// Thumb image replacing the default round thumb.
    #[setters(strip_option)]
    pub thumb_image: Option<ThumbImage>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            minimum_track_tint_color: Color::BLUE,
            minimum_value: RANGE_FLOOR,
            maximum_value: RANGE_CEILING,
            label_bottom_padding: Dp(5.0),
            default_value: 0.0,
            add_mark: false,
            thumb_image: None,
        }
    }
}

impl SliderConfig {
    /// Applies `options` in order onto the defaults and validates the result.
    ///
    /// Stops at the first range directive outside `[0, 100]`, even when a
    /// later directive of the same kind would replace it.
    pub fn from_options(options: &[SliderOption]) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for option in options {
            config.apply(option.clone())?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Applies one directive. A later directive of the same kind overwrites
    /// an earlier one.
    ///
    /// Range directives outside `[0, 100]` are rejected and leave the record
    /// unchanged.
    pub fn apply(&mut self, option: SliderOption) -> Result<(), ConfigError> {
        match option {
            SliderOption::MinimumTrackTintColor(color) => self.minimum_track_tint_color = color,
            SliderOption::MinimumValue(value) => {
                if !in_range(value) {
                    return Err(ConfigError::MinimumValueOutOfRange(value));
                }
                self.minimum_value = value;
            }
            SliderOption::MaximumValue(value) => {
                if !in_range(value) {
                    return Err(ConfigError::MaximumValueOutOfRange(value));
                }
                self.maximum_value = value;
            }
            SliderOption::LabelBottomPadding(padding) => self.label_bottom_padding = padding,
            SliderOption::DefaultValue(value) => self.default_value = value,
            SliderOption::AddMark(add_mark) => self.add_mark = add_mark,
            SliderOption::ThumbImage(image) => self.thumb_image = Some(image),
        }
        Ok(())
    }

    /// Checks the range bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !in_range(self.minimum_value) {
            return Err(ConfigError::MinimumValueOutOfRange(self.minimum_value));
        }
        if !in_range(self.maximum_value) {
            return Err(ConfigError::MaximumValueOutOfRange(self.maximum_value));
        }
        if self.minimum_value > self.maximum_value {
            return Err(ConfigError::InvertedRange {
                minimum: self.minimum_value,
                maximum: self.maximum_value,
            });
        }
        Ok(())
    }

    /// The configured thumb image, or the default round thumb.
    pub fn resolved_thumb_image(&self) -> ThumbImage {
        self.thumb_image
            .clone()
            .unwrap_or_else(ThumbImage::default_round)
    }
}

fn in_range(value: f32) -> bool {
    (RANGE_FLOOR..=RANGE_CEILING).contains(&value)
}
