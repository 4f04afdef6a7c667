//! Discrete rainbow palettes.
//!
//! [`rainbow_colors`] picks `n` colors from a fixed 23-entry reference
//! rainbow running from pale purple through blue, green and yellow to dark
//! brown. Small counts use hand-picked subsets so that even two or three
//! series stay clearly distinguishable; mid-range counts are sampled evenly
//! from the reference; larger counts fall back to a generated sequence.
//!
//! # Example
//!
//! ```rust
//! use scistyle::palette::{rainbow_colors, DEEP_RED, MID_BLUE};
//!
//! let colors = rainbow_colors(2).unwrap();
//! assert_eq!(colors, vec![MID_BLUE, DEEP_RED]);
//! ```

use thiserror::Error;

use crate::color::Color;

/// Number of entries in [`REFERENCE`].
pub const REFERENCE_LEN: usize = 23;

/// Largest palette [`rainbow_colors`] will produce.
pub const MAX_COLORS: usize = 4096;

/// The reference rainbow, ordered from pale purple to dark brown.
pub const REFERENCE: [Color; REFERENCE_LEN] = [
    Color::from_u32(0xE8ECFB),
    Color::from_u32(0xD9CCE3),
    Color::from_u32(0xD1BBD7),
    Color::from_u32(0xCAACCB),
    Color::from_u32(0xBA8DB4),
    Color::from_u32(0xAE76A3),
    Color::from_u32(0x994F88),
    Color::from_u32(0x882E72),
    Color::from_u32(0x1965B0),
    Color::from_u32(0x5289C7),
    Color::from_u32(0x7BAFDE),
    Color::from_u32(0x4EB265),
    Color::from_u32(0x90C987),
    Color::from_u32(0xCAE0AB),
    Color::from_u32(0xF7F056),
    Color::from_u32(0xF6C141),
    Color::from_u32(0xF1932D),
    Color::from_u32(0xEE8026),
    Color::from_u32(0xE8601C),
    Color::from_u32(0xDC050C),
    Color::from_u32(0xA5170E),
    Color::from_u32(0x72190E),
    Color::from_u32(0x42150A),
];

const MID_BLUE_IDX: usize = 8;
const LIGHT_BLUE_IDX: usize = 10;
const GREEN_IDX: usize = 11;
const PALE_YELLOW_IDX: usize = 14;
const DEEP_RED_IDX: usize = 19;

pub const MID_BLUE: Color = REFERENCE[MID_BLUE_IDX];
pub const LIGHT_BLUE: Color = REFERENCE[LIGHT_BLUE_IDX];
pub const GREEN: Color = REFERENCE[GREEN_IDX];
pub const PALE_YELLOW: Color = REFERENCE[PALE_YELLOW_IDX];
pub const DEEP_RED: Color = REFERENCE[DEEP_RED_IDX];

const CURATED: [&[usize]; 5] = [
    &[MID_BLUE_IDX],
    &[MID_BLUE_IDX, DEEP_RED_IDX],
    &[MID_BLUE_IDX, PALE_YELLOW_IDX, DEEP_RED_IDX],
    &[MID_BLUE_IDX, GREEN_IDX, PALE_YELLOW_IDX, DEEP_RED_IDX],
    &[
        MID_BLUE_IDX,
        LIGHT_BLUE_IDX,
        GREEN_IDX,
        PALE_YELLOW_IDX,
        DEEP_RED_IDX,
    ],
];

/// Error returned for palette sizes outside `1..=MAX_COLORS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette size must be at least 1, got {0}")]
    InvalidCount(i64),
    #[error("palette size {requested} exceeds the maximum of {max}")]
    TooMany { requested: i64, max: usize },
}

/// Returns `n` ordered colors for a discrete rainbow palette.
///
/// - `1..=5`: curated subsets; the first color is always [`MID_BLUE`] and,
///   from two colors up, the last is always [`DEEP_RED`].
/// - `6..=23`: `n` evenly spaced entries of [`REFERENCE`], both ends
///   included, indices rounded half away from zero.
/// - `24..=MAX_COLORS`: a deterministic generated sequence of distinct
///   colors that stays clear of the two endpoint colors.
///
/// # Errors
///
/// [`PaletteError::InvalidCount`] when `n < 1` and
/// [`PaletteError::TooMany`] when `n > MAX_COLORS`.
pub fn rainbow_colors(n: i64) -> Result<Vec<Color>, PaletteError> {
    if n < 1 {
        return Err(PaletteError::InvalidCount(n));
    }
    if n > MAX_COLORS as i64 {
        return Err(PaletteError::TooMany {
            requested: n,
            max: MAX_COLORS,
        });
    }

    Ok(select(n as usize))
}

/// Palette selection for an already validated count.
pub(crate) fn select(n: usize) -> Vec<Color> {
    debug_assert!((1..=MAX_COLORS).contains(&n));
    if n <= CURATED.len() {
        CURATED[n - 1].iter().map(|&i| REFERENCE[i]).collect()
    } else if n <= REFERENCE_LEN {
        evenly_spaced_indices(n)
            .into_iter()
            .map(|i| REFERENCE[i])
            .collect()
    } else {
        generated(n)
    }
}

/// `n` indices spread over `0..REFERENCE_LEN`, first and last included.
///
/// Computes `round(i * 22 / (n - 1))` in integers: `floor(x + 1/2)` is
/// round-half-away-from-zero for non-negative `x`.
fn evenly_spaced_indices(n: usize) -> Vec<usize> {
    debug_assert!((2..=REFERENCE_LEN).contains(&n));
    let last = REFERENCE_LEN - 1;
    let span = n - 1;
    (0..n)
        .map(|i| (2 * i * last + span) / (2 * span))
        .collect()
}

const GOLDEN_STEP: f64 = 0.618_033_988_749_895;
const PLASTIC_STEP_1: f64 = 0.754_877_666_246_692_7;
const PLASTIC_STEP_2: f64 = 0.569_840_290_998_053_2;

/// Candidates closer than this (squared RGB distance) to an endpoint are skipped.
const MIN_ENDPOINT_DISTANCE_SQ: u32 = 60 * 60;

/// Walks a low-discrepancy sequence through HSV space, keeping distinct
/// candidates that do not crowd [`MID_BLUE`] or [`DEEP_RED`].
fn generated(n: usize) -> Vec<Color> {
    let avoid = [MID_BLUE, DEEP_RED];
    let mut colors: Vec<Color> = Vec::with_capacity(n);
    let mut step: u64 = 0;

    while colors.len() < n {
        step += 1;
        let t = step as f64;
        let hue = (t * GOLDEN_STEP).fract();
        let saturation = 0.45 + 0.45 * (t * PLASTIC_STEP_1).fract();
        let value = 0.55 + 0.40 * (t * PLASTIC_STEP_2).fract();
        let candidate = Color::from_hsv(hue, saturation, value);

        let crowded = avoid
            .iter()
            .any(|c| c.distance_sq(&candidate) < MIN_ENDPOINT_DISTANCE_SQ);
        if crowded || colors.contains(&candidate) {
            continue;
        }
        colors.push(candidate);
    }

    colors
}
