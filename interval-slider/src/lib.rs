//! A slider control that snaps to a fixed, ordered set of discrete values.
//!
//! Each stop pairs a *valid value*, which the application reads and writes,
//! with an *appearance value*, the position on a continuous track where the
//! stop is drawn. Drags move the thumb freely and snap to the nearest stop
//! when released; labels and optional marks follow the stops as the control
//! is resized.
//!
//! # Usage
//!
//! ```
//! use interval_slider::{IntervalSlider, Px, PxRect, SliderOption, ValueEntry};
//!
//! let mut slider = IntervalSlider::new(
//!     PxRect::new(Px(0), Px(0), Px(300), Px(80)),
//!     vec![
//!         ValueEntry::new(0.25, 0.0),
//!         ValueEntry::new(0.5, 40.0),
//!         ValueEntry::new(1.0, 100.0),
//!     ],
//!     &[SliderOption::DefaultValue(45.0)],
//! )
//! .unwrap();
//! assert_eq!(slider.value(), 0.5);
//!
//! assert_eq!(slider.on_drag_end(83.0), 1.0);
//! slider.set_value(0.25).unwrap();
//! assert_eq!(slider.value(), 0.25);
//! ```
//!
//! The control drives any [`ContinuousRangeWidget`]; [`TrackSlider`] is the
//! built-in headless implementation.
#![deny(missing_docs, clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod animation;
pub mod color;
pub mod decoration;
pub mod dp;
pub mod error;
pub mod geometry;
pub mod interval_slider;
pub mod layout;
pub mod options;
pub mod prop;
pub mod px;
pub mod snap;
pub mod table;
pub mod thumb;
pub mod track_slider;
pub mod widget;

pub use crate::{
    color::Color,
    decoration::{Label, Mark},
    dp::Dp,
    error::{ConfigError, SliderError},
    geometry::GeometryMapper,
    interval_slider::{IntervalSlider, InteractionState},
    layout::LayoutEngine,
    options::{SliderConfig, SliderOption},
    prop::CallbackWith,
    px::{Px, PxPosition, PxRect, PxSize},
    table::{Stop, ValueEntry, ValueTable},
    thumb::ThumbImage,
    track_slider::TrackSlider,
    widget::{ContinuousRangeWidget, ThumbState, TouchAcceptance},
};
