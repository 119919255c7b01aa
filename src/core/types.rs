use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};

/// Stable identifier of one slide inside a [`SlideSet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideId(String);

impl SlideId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SlideId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Ordered slide sequence. Immutable once built and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSet {
    slides: Vec<SlideId>,
}

impl SlideSet {
    pub fn new(slides: Vec<SlideId>) -> WidgetResult<Self> {
        if slides.is_empty() {
            return Err(WidgetError::EmptySlideSet);
        }
        Ok(Self { slides })
    }

    /// Builds a set of `count` slides named `slide-0..slide-{count-1}`.
    pub fn with_count(count: usize) -> WidgetResult<Self> {
        Self::new((0..count).map(|i| SlideId::new(format!("slide-{i}"))).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SlideId> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideId> {
        self.slides.iter()
    }
}

/// Host-assigned identity of one input source (mouse, finger, pen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub u64);

/// Horizontal layout of the slider track in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    pub left: f64,
    pub width: f64,
}

impl TrackGeometry {
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }
}
