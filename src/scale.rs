//! Shared coordinate scaling.
//!
//! A render batch makes two passes: a scan pass folds every row's
//! coordinates into an [`Extent`], then [`Extent::freeze`] derives the
//! [`Scaling`] every row of the batch shares. Freezing consumes the extent,
//! so "never scan after freezing" is enforced by the type system rather
//! than by convention.

use glam::{DVec2, dvec2};

use crate::log;
use crate::types::CoordPair;

/// Running min/max over every complete coordinate pair in a batch.
///
/// Starts at the inverted sentinel (like an empty interval) and expands on
/// the first pair. Pairs with a blank component are skipped so they cannot
/// distort the box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    /// An empty extent (will expand on the first scanned pair).
    pub fn new() -> Self {
        Extent {
            min_x: f64::MAX,
            min_y: f64::MAX,
            max_x: f64::MIN,
            max_y: f64::MIN,
        }
    }

    /// True until at least one complete pair has been scanned.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Expand to include a point.
    pub fn expand(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Fold a row's coordinate pairs into the running box.
    ///
    /// A pure min/max fold: scanning the same pairs twice yields the same
    /// box as scanning them once.
    pub fn scan<'a>(&mut self, pairs: impl IntoIterator<Item = &'a CoordPair>) {
        for pair in pairs {
            match pair.values() {
                Some((x, y)) => self.expand(x, y),
                None => {
                    log::debug!("skipping incomplete coordinate pair in scan");
                }
            }
        }
    }

    /// Derive the frozen scale record for a canvas of `width` x `height`
    /// with uniform `padding` on every side.
    ///
    /// A degenerate axis (`max == min`, e.g. a single point) gets scale
    /// exactly `1` and is centered; there is no division by zero and no
    /// error path.
    pub fn freeze(self, width: f64, height: f64, padding: f64) -> Scaling {
        // An extent nobody scanned into behaves like a degenerate point at
        // the origin.
        let (min_x, min_y, max_x, max_y) = if self.is_empty() {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            (self.min_x, self.min_y, self.max_x, self.max_y)
        };

        let avail_w = (width - 2.0 * padding).max(0.0);
        let avail_h = (height - 2.0 * padding).max(0.0);
        let span_x = max_x - min_x;
        let span_y = max_y - min_y;
        let scale_x = if span_x == 0.0 { 1.0 } else { avail_w / span_x };
        let scale_y = if span_y == 0.0 { 1.0 } else { avail_h / span_y };

        // The centering term is zero when the extent fills the padded
        // canvas exactly; it only moves degenerate axes to the middle.
        let offset_x = padding + 0.5 * (avail_w - span_x * scale_x);
        let offset_y = padding + 0.5 * (avail_h - span_y * scale_y);

        log::debug!(
            min_x,
            min_y,
            max_x,
            max_y,
            scale_x,
            scale_y,
            "froze batch extent"
        );

        Scaling {
            min_x,
            min_y,
            max_x,
            max_y,
            scale_x,
            scale_y,
            offset_x,
            offset_y,
            width,
            height,
        }
    }
}

impl Default for Extent {
    fn default() -> Self {
        Extent::new()
    }
}

/// The frozen mapping from raw coordinates to pixel space for one render
/// batch. Immutable once built; share it read-only across the batch's rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaling {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Scaling {
    /// Map one raw pair into pixel space.
    ///
    /// Blank components stay blank per axis; they are never coerced to
    /// zero, so renderers can tell an incomplete row from one at the
    /// origin.
    pub fn map(&self, pair: &CoordPair) -> PixelPair {
        PixelPair {
            x: pair
                .x
                .value()
                .map(|x| (x - self.min_x) * self.scale_x + self.offset_x),
            y: pair
                .y
                .value()
                .map(|y| (y - self.min_y) * self.scale_y + self.offset_y),
        }
    }

    /// Map a pair sequence, dropping pairs that are not drawable.
    pub fn map_drawable(&self, pairs: &[CoordPair]) -> Vec<DVec2> {
        pairs
            .iter()
            .filter_map(|pair| self.map(pair).point())
            .collect()
    }
}

/// A coordinate pair mapped into pixel space.
///
/// Each axis independently reports blank; a drawable position exists only
/// when both are present.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PixelPair {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl PixelPair {
    /// The drawable position, if both components are present.
    pub fn point(&self) -> Option<DVec2> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(dvec2(x, y)),
            _ => None,
        }
    }
}
