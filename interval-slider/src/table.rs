//! The table of stops a slider snaps to.
//!
//! Each stop pairs a *valid value* (what the application reads back) with an
//! *appearance value* (where the stop sits on the continuous track), plus the
//! decorations drawn for it. The table is fixed once the control is built.

use tracing::warn;

use crate::{
    decoration::{Label, Mark},
    error::SliderError,
    snap::nearest_index,
};

/// A (valid value, appearance value, optional label) triple supplied by the
/// host at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueEntry {
    valid_value: f32,
    appearance_value: f32,
    label: Option<Label>,
}

impl ValueEntry {
    /// Creates an entry without a label.
    pub fn new(valid_value: f32, appearance_value: f32) -> Self {
        Self {
            valid_value,
            appearance_value,
            label: None,
        }
    }

    /// Attaches the label rendered above this entry's position.
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    /// The externally meaningful value.
    pub fn valid_value(&self) -> f32 {
        self.valid_value
    }

    /// The position on the continuous track.
    pub fn appearance_value(&self) -> f32 {
        self.appearance_value
    }

    /// The label, if any.
    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }
}

/// One entry of a built table together with its decorations.
///
/// The values are immutable; only the decorations move during layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    valid_value: f32,
    appearance_value: f32,
    label: Option<Label>,
    mark: Option<Mark>,
}

impl Stop {
    fn from_entry(entry: ValueEntry) -> Self {
        let mut label = entry.label;
        if let Some(label) = label.as_mut() {
            label.reset_origin();
        }
        Self {
            valid_value: entry.valid_value,
            appearance_value: entry.appearance_value,
            label,
            mark: None,
        }
    }

    /// The externally meaningful value.
    pub fn valid_value(&self) -> f32 {
        self.valid_value
    }

    /// The position on the continuous track.
    pub fn appearance_value(&self) -> f32 {
        self.appearance_value
    }

    /// The label drawn above the stop.
    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    /// The mark drawn under the track, present when marks are enabled.
    pub fn mark(&self) -> Option<&Mark> {
        self.mark.as_ref()
    }

    pub(crate) fn label_mut(&mut self) -> Option<&mut Label> {
        self.label.as_mut()
    }

    pub(crate) fn mark_mut(&mut self) -> Option<&mut Mark> {
        self.mark.as_mut()
    }
}

/// The ordered, non-empty set of stops of one control.
///
/// Lookups by value use exact floating-point equality and are only meaningful
/// for values taken from the table itself; everything the control stores is
/// keyed by stop index instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTable {
    stops: Vec<Stop>,
}

impl ValueTable {
    /// Builds a table from the host-supplied entries, in order.
    ///
    /// Rejects an empty list, non-finite values, and duplicated appearance or
    /// valid values.
    pub fn new(entries: Vec<ValueEntry>) -> Result<Self, SliderError> {
        if entries.is_empty() {
            warn!("Rejecting interval slider value table without entries");
            return Err(SliderError::EmptyEntries);
        }
        for (index, entry) in entries.iter().enumerate() {
            if !entry.valid_value.is_finite() || !entry.appearance_value.is_finite() {
                return Err(SliderError::NonFiniteValue { index });
            }
            let earlier = &entries[..index];
            if earlier
                .iter()
                .any(|e| e.appearance_value == entry.appearance_value)
            {
                return Err(SliderError::DuplicateAppearanceValue(entry.appearance_value));
            }
            if earlier.iter().any(|e| e.valid_value == entry.valid_value) {
                return Err(SliderError::DuplicateValidValue(entry.valid_value));
            }
        }
        Ok(Self {
            stops: entries.into_iter().map(Stop::from_entry).collect(),
        })
    }

    /// Number of stops; never zero.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The stops in table order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// The stop at `index`.
    pub fn get(&self, index: usize) -> Option<&Stop> {
        self.stops.get(index)
    }

    /// Iterates over the stops in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Stop> {
        self.stops.iter()
    }

    /// Index of the stop whose appearance value equals `appearance_value`.
    pub fn index_of_appearance_value(&self, appearance_value: f32) -> Option<usize> {
        self.stops
            .iter()
            .position(|stop| stop.appearance_value == appearance_value)
    }

    /// Index of the stop whose valid value equals `valid_value`.
    pub fn index_of_valid_value(&self, valid_value: f32) -> Option<usize> {
        self.stops
            .iter()
            .position(|stop| stop.valid_value == valid_value)
    }

    /// The valid value paired with exactly `appearance_value`.
    pub fn valid_value_for(&self, appearance_value: f32) -> Option<f32> {
        self.index_of_appearance_value(appearance_value)
            .map(|index| self.stops[index].valid_value)
    }

    /// The appearance value paired with exactly `valid_value`.
    pub fn appearance_value_for(&self, valid_value: f32) -> Option<f32> {
        self.index_of_valid_value(valid_value)
            .map(|index| self.stops[index].appearance_value)
    }

    /// Index of the stop whose appearance value is closest to `raw`; ties go
    /// to the earlier stop.
    pub fn nearest_index(&self, raw: f32) -> usize {
        nearest_index(self.stops.iter().map(Stop::appearance_value), raw).unwrap_or(0)
    }

    /// The appearance value closest to `raw`; ties go to the earlier stop.
    pub fn nearest_appearance_value(&self, raw: f32) -> f32 {
        self.stops[self.nearest_index(raw)].appearance_value
    }

    /// Index of the stop whose valid value is closest to `valid_value`; ties
    /// go to the earlier stop.
    pub fn nearest_valid_index(&self, valid_value: f32) -> usize {
        nearest_index(self.stops.iter().map(Stop::valid_value), valid_value).unwrap_or(0)
    }

    /// Gives every stop a mark.
    pub(crate) fn attach_marks(&mut self) {
        for stop in &mut self.stops {
            stop.mark = Some(Mark::new());
        }
    }

    pub(crate) fn stops_mut(&mut self) -> &mut [Stop] {
        &mut self.stops
    }
}

impl<'a> IntoIterator for &'a ValueTable {
    type Item = &'a Stop;
    type IntoIter = std::slice::Iter<'a, Stop>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}
