//! Linear RGB gradients across a possibly off-strip span.
//!
//! A gradient runs from `start` to `end`, both signed so the span can begin
//! before LED 0 or finish past the last LED. Colors are computed over the
//! whole conceptual span, then only the visible steps are emitted.

use crate::types::SkipReason;
use palette::Srgb;

/// What the driver has to send for a gradient request.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientPlan {
    /// Zero-length span: only the start color is set, no LED is addressed.
    Solid(Srgb<u8>),

    /// One `(index, color)` pair per visible step.
    Steps(GradientSteps),
}

/// Plans a gradient from `start` to `end` on a strip whose last index is `highest`.
///
/// # Errors
/// * `InvertedRange` - `start > end`
/// * `OutOfRange` - `start` lies past `highest`
/// * `NotVisible` - the whole span lies before index 0
///
/// `end` may exceed `highest`; the far end is trimmed instead.
pub fn plan(
    start: i32,
    end: i32,
    from: Srgb<u8>,
    to: Srgb<u8>,
    highest: u8,
) -> Result<GradientPlan, SkipReason> {
    if start > end {
        return Err(SkipReason::InvertedRange);
    }
    if start > i32::from(highest) {
        return Err(SkipReason::OutOfRange);
    }

    let (start, end, highest) = (i64::from(start), i64::from(end), i64::from(highest));
    let total = end - start;
    if total == 0 {
        return Ok(GradientPlan::Solid(from));
    }

    let first = (-start).max(0);
    let last = total - (end - highest).max(0);
    if first > last {
        return Err(SkipReason::NotVisible);
    }

    Ok(GradientPlan::Steps(GradientSteps {
        start,
        total,
        next: first,
        last,
        from,
        to,
    }))
}

/// Interpolates one channel at `step` of `total`, truncating toward zero.
///
/// `step` is clamped to `0..=total`, so the result always lies between `from`
/// and `to`. A non-positive `total` yields `from`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn lerp_channel(from: u8, to: u8, step: i64, total: i64) -> u8 {
    if total <= 0 {
        return from;
    }
    let step = step.clamp(0, total);
    let from = i64::from(from);
    let delta = i64::from(to) - from;
    (from + delta * step / total) as u8
}

/// Iterator over the visible steps of a gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSteps {
    start: i64,
    total: i64,
    next: i64,
    last: i64,
    from: Srgb<u8>,
    to: Srgb<u8>,
}

impl GradientSteps {
    /// Color at `step` of the full conceptual span.
    pub fn color_at(&self, step: i64) -> Srgb<u8> {
        Srgb::new(
            lerp_channel(self.from.red, self.to.red, step, self.total),
            lerp_channel(self.from.green, self.to.green, step, self.total),
            lerp_channel(self.from.blue, self.to.blue, step, self.total),
        )
    }
}

impl Iterator for GradientSteps {
    type Item = (u8, Srgb<u8>);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.last {
            return None;
        }
        let step = self.next;
        self.next += 1;
        // The visible window keeps start + step within 0..=highest.
        Some(((self.start + step) as u8, self.color_at(step)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.last - self.next + 1).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GradientSteps {}
