//! Analog level quantizer.
//!
//! Maps a raw ADC sample onto a signed discrete level. The span is
//! split into a dead zone around the midpoint (level 0) and
//! `resolution` buckets per side. Bucket borders are walked outward
//! from the dead-zone edge in equal steps; the first border strictly
//! beyond the sample names its bucket, and anything past the last
//! border saturates to `resolution`.
//!
//! ```text
//!   MIN            low   mid   high                 MAX
//!    |-5-|-4-|-3-|-2-|-1-|  0  |-1-|-2-|-3-|-4-|-5-|
//!        negative side          positive side
//! ```
//!
//! The result is a pure function of the sample and the config; nothing
//! carries over between ticks.

use crate::config::QuantizerConfig;

/// Which side of the dead zone a level sits on; doubles as the colour tag
/// for the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Neutral,
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    /// 0 in the dead zone, otherwise 1..=resolution.
    pub magnitude: u8,
    pub polarity: Polarity,
}

impl Level {
    pub const NEUTRAL: Level = Level {
        magnitude: 0,
        polarity: Polarity::Neutral,
    };

    pub const fn positive(magnitude: u8) -> Self {
        Self {
            magnitude,
            polarity: Polarity::Positive,
        }
    }

    pub const fn negative(magnitude: u8) -> Self {
        Self {
            magnitude,
            polarity: Polarity::Negative,
        }
    }

    /// Level as a signed integer in `-resolution..=resolution`.
    pub const fn signed(self) -> i8 {
        match self.polarity {
            Polarity::Neutral => 0,
            Polarity::Positive => self.magnitude as i8,
            Polarity::Negative => -(self.magnitude as i8),
        }
    }
}

/// Dead-zone bounds `(low, high)` measured from `cfg.min`.
pub fn dead_zone(cfg: &QuantizerConfig) -> (f32, f32) {
    let span = cfg.span() as f32;
    let mid = span / 2.0;
    let half_width = span * cfg.zero_range;
    (mid - half_width, mid + half_width)
}

/// Raw sample scaled to `0.0..=1.0`.
pub fn normalize(cfg: &QuantizerConfig, raw: u16) -> f32 {
    offset(cfg, raw) / cfg.span() as f32
}

pub fn quantize(cfg: &QuantizerConfig, raw: u16) -> Level {
    let x = offset(cfg, raw);
    let res = cfg.resolution;
    let (low, high) = dead_zone(cfg);

    if low < x && x < high {
        return Level::NEUTRAL;
    }

    // The dead zone is open, so a sample sitting exactly on `high` or
    // `low` belongs to the outer walk and no third case exists.
    if x >= high {
        let step = (cfg.span() as f32 - high) / res as f32;
        Level::positive(walk(res, |i| high + step * (i as f32) > x))
    } else {
        debug_assert!(x <= low);
        let step = low / res as f32;
        Level::negative(walk(res, |i| low - step * (i as f32) < x))
    }
}

// first bucket whose outer border lies strictly beyond the sample
fn walk(res: u8, beyond: impl Fn(u8) -> bool) -> u8 {
    (1..res).find(|&i| beyond(i)).unwrap_or(res)
}

fn offset(cfg: &QuantizerConfig, raw: u16) -> f32 {
    (raw.clamp(cfg.min, cfg.max) - cfg.min) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MATRIX_LEVELS;

    fn cfg(min: u16, max: u16, zero: f32, res: u8) -> QuantizerConfig {
        QuantizerConfig::new(min, max, zero, res).unwrap()
    }

    #[test]
    fn sample_sequence_maps_to_expected_levels() {
        let levels: Vec<Level> = [2047, 2047, 4095, 4095, 0]
            .iter()
            .map(|&r| quantize(&MATRIX_LEVELS, r))
            .collect();
        assert_eq!(
            levels,
            [
                Level::NEUTRAL,
                Level::NEUTRAL,
                Level::positive(5),
                Level::positive(5),
                Level::negative(5),
            ]
        );
    }

    #[test]
    fn same_sample_same_level() {
        for r in (0..=4095).step_by(7) {
            assert_eq!(quantize(&MATRIX_LEVELS, r), quantize(&MATRIX_LEVELS, r));
        }
    }

    #[test]
    fn whole_dead_zone_is_neutral() {
        let (low, high) = dead_zone(&MATRIX_LEVELS);
        let mut seen = 0;
        for r in 0..=4095u16 {
            let x = r as f32;
            if low < x && x < high {
                assert_eq!(quantize(&MATRIX_LEVELS, r), Level::NEUTRAL, "r={r}");
                seen += 1;
            }
        }
        // 1966..=2129
        assert_eq!(seen, 164);
        assert_eq!(quantize(&MATRIX_LEVELS, 2047), Level::NEUTRAL);
        assert_eq!(quantize(&MATRIX_LEVELS, 2048), Level::NEUTRAL);
    }

    #[test]
    fn levels_never_decrease_past_centre() {
        let (low, high) = dead_zone(&MATRIX_LEVELS);
        let mut prev = 0;
        for r in high.ceil() as u16..=4095 {
            let level = quantize(&MATRIX_LEVELS, r);
            assert_eq!(level.polarity, Polarity::Positive);
            assert!(level.magnitude >= prev, "r={r}");
            prev = level.magnitude;
        }
        assert_eq!(prev, 5);

        let mut prev = 0;
        for r in (0..=low.floor() as u16).rev() {
            let level = quantize(&MATRIX_LEVELS, r);
            assert_eq!(level.polarity, Polarity::Negative);
            assert!(level.magnitude >= prev, "r={r}");
            prev = level.magnitude;
        }
        assert_eq!(prev, 5);
    }

    #[test]
    fn extremes_saturate() {
        assert_eq!(quantize(&MATRIX_LEVELS, 4095), Level::positive(5));
        assert_eq!(quantize(&MATRIX_LEVELS, 0), Level::negative(5));

        let three = cfg(0, 4095, 0.02, 3);
        assert_eq!(quantize(&three, 4095), Level::positive(3));
        assert_eq!(quantize(&three, 0), Level::negative(3));
    }

    #[test]
    fn every_bucket_is_reachable() {
        let mut pos = [false; 6];
        let mut neg = [false; 6];
        for r in 0..=4095 {
            let level = quantize(&MATRIX_LEVELS, r);
            match level.polarity {
                Polarity::Positive => pos[level.magnitude as usize] = true,
                Polarity::Negative => neg[level.magnitude as usize] = true,
                Polarity::Neutral => {}
            }
        }
        assert_eq!(pos, [false, true, true, true, true, true]);
        assert_eq!(neg, [false, true, true, true, true, true]);
    }

    // span 4000 with a 2.5% dead zone puts both bounds and every border
    // on whole numbers, so samples can land exactly on them.
    #[test]
    fn samples_on_dead_zone_edges_leave_the_dead_zone() {
        let c = cfg(0, 4000, 0.025, 5);
        assert_eq!(dead_zone(&c), (1900.0, 2100.0));
        assert_eq!(quantize(&c, 2099), Level::NEUTRAL);
        assert_eq!(quantize(&c, 1901), Level::NEUTRAL);
        assert_eq!(quantize(&c, 2100), Level::positive(1));
        assert_eq!(quantize(&c, 1900), Level::negative(1));
    }

    #[test]
    fn sample_on_a_border_goes_to_the_outer_bucket() {
        let c = cfg(0, 4000, 0.025, 5);
        // positive borders: 2480, 2860, 3240, 3620
        assert_eq!(quantize(&c, 2479), Level::positive(1));
        assert_eq!(quantize(&c, 2480), Level::positive(2));
        assert_eq!(quantize(&c, 3619), Level::positive(4));
        assert_eq!(quantize(&c, 3620), Level::positive(5));
        // negative borders: 1520, 1140, 760, 380
        assert_eq!(quantize(&c, 1521), Level::negative(1));
        assert_eq!(quantize(&c, 1520), Level::negative(2));
        assert_eq!(quantize(&c, 380), Level::negative(5));
        assert_eq!(quantize(&c, 381), Level::negative(4));
    }

    #[test]
    fn offset_range_is_measured_from_min() {
        let c = cfg(1000, 3000, 0.02, 5);
        assert_eq!(quantize(&c, 2000), Level::NEUTRAL);
        assert_eq!(quantize(&c, 3000), Level::positive(5));
        assert_eq!(quantize(&c, 1000), Level::negative(5));
        // out-of-range samples clamp rather than wrap
        assert_eq!(quantize(&c, 10), Level::negative(5));
        assert_eq!(quantize(&c, 4095), Level::positive(5));
    }

    #[test]
    fn signed_view() {
        assert_eq!(Level::positive(3).signed(), 3);
        assert_eq!(Level::negative(2).signed(), -2);
        assert_eq!(Level::NEUTRAL.signed(), 0);
    }

    #[test]
    fn normalized_value() {
        assert_eq!(normalize(&MATRIX_LEVELS, 0), 0.0);
        assert_eq!(normalize(&MATRIX_LEVELS, 4095), 1.0);
        assert!((normalize(&MATRIX_LEVELS, 2047) - 0.49988).abs() < 1e-4);
    }
}
