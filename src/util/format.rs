//! Display formatting for venue distances and ratings.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

pub const NO_RATING: &str = "No rating";
pub const MAX_STARS: u8 = 5;

const FULL_STAR: char = '★';
const HALF_STAR: char = '⯨';
const EMPTY_STAR: char = '☆';

/// Render a distance in kilometers: whole meters below 1 km, otherwise
/// kilometers to one decimal.
///
/// `0.5` → `"500m"`, `2.34` → `"2.3km"`.
#[must_use]
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        // `+ 0.0` folds negative zero so `-0.0` prints as `0m`.
        format!("{:.0}m", (km * 1000.0).round() + 0.0)
    } else {
        format!("{:.1}km", round_tenths(km))
    }
}

/// Round to one decimal, ties away from zero (`4.25` → `4.3`).
///
/// `{:.1}` alone rounds exact binary ties to even.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Star breakdown of a rating, always summing to [`MAX_STARS`] positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarCounts {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarCounts {
    /// Split a rating into glyph counts. The rating is clamped to
    /// `0..=MAX_STARS` first; NaN counts as zero.
    #[must_use]
    pub fn from_rating(rating: f64) -> Self {
        let rating = clamp_rating(rating);
        let whole = rating.floor();
        let half = rating - whole >= 0.5;
        // `whole` is an integer in 0..=5 after clamping.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let full = whole as u8;
        let empty = MAX_STARS - full - u8::from(half);
        Self { full, half, empty }
    }

    /// Glyph string, e.g. `"★★★⯨☆"`.
    #[must_use]
    pub fn glyphs(self) -> String {
        let mut out = String::with_capacity(usize::from(MAX_STARS) * FULL_STAR.len_utf8());
        out.extend(std::iter::repeat_n(FULL_STAR, usize::from(self.full)));
        if self.half {
            out.push(HALF_STAR);
        }
        out.extend(std::iter::repeat_n(EMPTY_STAR, usize::from(self.empty)));
        out
    }
}

/// Render a rating as stars followed by the value to one decimal.
///
/// Missing, zero, and NaN ratings render as [`NO_RATING`]. Values outside
/// `0..=5` are clamped, so `7.2` renders the same as `5.0`.
#[must_use]
pub fn format_rating(rating: Option<f64>) -> String {
    let Some(rating) = rating.filter(|r| *r != 0.0 && !r.is_nan()) else {
        return NO_RATING.to_owned();
    };
    let rating = clamp_rating(rating);
    format!("{} {:.1}", StarCounts::from_rating(rating).glyphs(), round_tenths(rating))
}

fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        return 0.0;
    }
    rating.clamp(0.0, f64::from(MAX_STARS))
}
