//! Delivery sites: storages (sources) and enclosures (targets).
//!
//! Both are immutable inputs for the whole planning session.  An enclosure
//! is "consumed" by recording its ground cell in the session's visited set,
//! never by mutating the record itself.

use crate::{AirPoint, Diet};

/// A source of one diet's feed.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Storage {
    pub position: AirPoint,
    pub diet:     Diet,
    /// Stock on hand, if the input format supplies it.  Capacity is not
    /// consumed by planning; it is carried for downstream reporting.
    pub capacity: Option<f32>,
}

impl Storage {
    pub const fn new(position: AirPoint, diet: Diet) -> Self {
        Self { position, diet, capacity: None }
    }

    pub const fn with_capacity(position: AirPoint, diet: Diet, capacity: f32) -> Self {
        Self { position, diet, capacity: Some(capacity) }
    }
}

/// A delivery target.  Higher `importance` is served first.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enclosure {
    pub position:   AirPoint,
    pub importance: f32,
    pub diet:       Diet,
}

impl Enclosure {
    pub const fn new(position: AirPoint, importance: f32, diet: Diet) -> Self {
        Self { position, importance, diet }
    }
}
