//! Channel ratios over a pixel selection

use crate::domain::{ChannelRaster, ChannelSet, PixelSelection};

/// Decimal places ratios are rounded to unless configured otherwise
pub const DEFAULT_RATIO_DECIMALS: u32 = 2;

/// Most decimal places an `f64` ratio can meaningfully carry
pub const MAX_RATIO_DECIMALS: u32 = 15;

/// Ratio of two channels over a selection, labelled `"{a}/{b}"`
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelRatio {
    pub label: String,
    pub value: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatioAnalyzer {
    pub decimals: u32,
}

impl Default for RatioAnalyzer {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_RATIO_DECIMALS,
        }
    }
}

impl RatioAnalyzer {
    /// `decimals` above `MAX_RATIO_DECIMALS` is clamped
    pub fn new(decimals: u32) -> Self {
        Self {
            decimals: decimals.min(MAX_RATIO_DECIMALS),
        }
    }

    /// Running ratio of `numerator / denominator` over the selected pixels
    ///
    /// Pixels are visited in ascending index order. The first finite ratio
    /// seeds the accumulator and every later one replaces it with
    /// `(ratio + acc) / 2`, so later pixels weigh more than earlier ones.
    /// Pixels whose ratio is not finite, or that either channel lacks a
    /// sample for, are skipped. Returns `None` when no pixel contributed or
    /// a channel does not share the selection's pixel grid.
    pub fn average_ratio(
        &self,
        selection: &PixelSelection,
        numerator: &ChannelRaster,
        denominator: &ChannelRaster,
    ) -> Option<f64> {
        for channel in [numerator, denominator] {
            if !channel.geometry.same_dimensions(selection.raster()) {
                log::warn!(
                    "Channel '{}' is {}x{} but selection '{}' is {}x{}",
                    channel.name,
                    channel.geometry.width(),
                    channel.geometry.height(),
                    selection.image_name(),
                    selection.raster().width(),
                    selection.raster().height()
                );
                return None;
            }
        }

        let mut acc: Option<f64> = None;
        let mut skipped = 0usize;
        for &idx in selection.pixels() {
            let ratio = match (numerator.sample(idx), denominator.sample(idx)) {
                (Some(a), Some(b)) => a as f64 / b as f64,
                _ => f64::NAN,
            };
            if !ratio.is_finite() {
                skipped += 1;
                continue;
            }
            acc = Some(match acc {
                Some(prev) => (ratio + prev) / 2.0,
                None => ratio,
            });
        }

        log::trace!(
            "{}/{}: {} pixels, {} skipped",
            numerator.name,
            denominator.name,
            selection.len(),
            skipped
        );
        acc.map(|value| self.round(value))
    }

    /// `average_ratio` looked up by channel name
    pub fn average_ratio_by_name(
        &self,
        selection: &PixelSelection,
        channels: &ChannelSet,
        numerator: &str,
        denominator: &str,
    ) -> Option<f64> {
        let a = channels.get(numerator)?;
        let b = channels.get(denominator)?;
        self.average_ratio(selection, a, b)
    }

    /// `average_ratio` for every ordered pair of distinct channels
    pub fn average_ratios_all_pairs(
        &self,
        selection: &PixelSelection,
        channels: &ChannelSet,
    ) -> Vec<ChannelRatio> {
        let mut ratios = Vec::new();
        for a in channels.iter() {
            for b in channels.iter() {
                if a.name == b.name {
                    continue;
                }
                ratios.push(ChannelRatio {
                    label: format!("{}/{}", a.name, b.name),
                    value: self.average_ratio(selection, a, b),
                });
            }
        }
        ratios
    }

    fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.decimals.min(MAX_RATIO_DECIMALS) as i32);
        (value * scale).round() / scale
    }
}
