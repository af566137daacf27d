//! Largest-Triangle-Three-Buckets downsampling.
//!
//! Reduces a series to `threshold` points while preserving its visual
//! shape: the first and last points anchor the output, interior indices are
//! partitioned into equal-width buckets, and each bucket contributes the
//! point forming the largest triangle with the previously selected point
//! and the next bucket's centroid. The greedy largest-triangle selection
//! keeps visual extrema and trend shape better than striding or averaging.
//!
//! All variants are no-ops returning the borrowed input when the threshold
//! cannot usefully reduce (`threshold >= len`) or leaves no interior
//! (`threshold < 3`).
//!
//! # References
//!
//! - Steinarsson, S. (2013). *Downsampling Time Series for Visual
//!   Representation.* MSc thesis, University of Iceland.

use std::borrow::Cow;

use crate::geometry::Point;

/// Downsample `(x, y)` points, triangle areas via the full 2D cross
/// product.
#[must_use]
pub fn lttb(data: &[Point], threshold: usize) -> Cow<'_, [Point]> {
    if threshold < 3 || threshold >= data.len() {
        return Cow::Borrowed(data);
    }
    let n = data.len();
    let every = (n - 2) as f64 / (threshold - 2) as f64;

    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(data[0]);

    let mut selected = 0usize;
    for bucket in 0..threshold - 2 {
        let (start, end) = bucket_range(bucket, every, n);
        let (avg_start, avg_end) = bucket_range(bucket + 1, every, n);

        let span = (avg_end - avg_start).max(1) as f64;
        let mut avg = Point::ORIGIN;
        for p in &data[avg_start..avg_end] {
            avg.x += p.x;
            avg.y += p.y;
        }
        avg.x /= span;
        avg.y /= span;

        let anchor = data[selected];
        let mut max_area = -1.0;
        let mut max_index = start;
        for (i, p) in data.iter().enumerate().take(end).skip(start) {
            let area = ((anchor.x - avg.x) * (p.y - anchor.y)
                - (anchor.x - p.x) * (avg.y - anchor.y))
                .abs()
                * 0.5;
            if area > max_area {
                max_area = area;
                max_index = i;
            }
        }
        sampled.push(data[max_index]);
        selected = max_index;
    }

    sampled.push(data[n - 1]);
    Cow::Owned(sampled)
}

/// Downsample a flat numeric series, triangle areas via the 1D proxy
/// `|value − mean| · |index − last selected index|`.
#[must_use]
pub fn lttb_values(data: &[f64], threshold: usize) -> Cow<'_, [f64]> {
    lttb_by(data, threshold, |v| *v)
}

/// Downsample keyed records through a value-extraction closure, using the
/// same 1D proxy as [`lttb_values`].
#[must_use]
pub fn lttb_by<T, F>(data: &[T], threshold: usize, value: F) -> Cow<'_, [T]>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    if threshold < 3 || threshold >= data.len() {
        return Cow::Borrowed(data);
    }
    let n = data.len();
    let every = (n - 2) as f64 / (threshold - 2) as f64;

    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(data[0].clone());

    let mut selected = 0usize;
    for bucket in 0..threshold - 2 {
        let (start, end) = bucket_range(bucket, every, n);
        let (avg_start, avg_end) = bucket_range(bucket + 1, every, n);

        let span = (avg_end - avg_start).max(1) as f64;
        let mut mean = 0.0;
        for item in &data[avg_start..avg_end] {
            mean += value(item);
        }
        mean /= span;

        let mut max_area = -1.0;
        let mut max_index = start;
        for (i, item) in data.iter().enumerate().take(end).skip(start) {
            let area = (value(item) - mean).abs() * (i as f64 - selected as f64).abs();
            if area > max_area {
                max_area = area;
                max_index = i;
            }
        }
        sampled.push(data[max_index].clone());
        selected = max_index;
    }

    sampled.push(data[n - 1].clone());
    Cow::Owned(sampled)
}

/// Half-open index range of interior bucket `bucket`, clamped into
/// `[1, n)` for the centroid bucket and `[1, n - 1)` for selection buckets
/// by construction of `every`.
fn bucket_range(bucket: usize, every: f64, n: usize) -> (usize, usize) {
    let start = (bucket as f64 * every).floor() as usize + 1;
    let end = (((bucket + 1) as f64 * every).floor() as usize + 1).min(n);
    (start, end.max(start))
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Output length is exactly the threshold in the reducing regime and
        /// the input length otherwise, for arbitrary (even non-finite) data.
        #[test]
        fn prop_output_length(values in prop::collection::vec(any::<f64>(), 0..256), threshold in 0usize..300) {
            let reduced = lttb_values(&values, threshold);
            if threshold >= 3 && threshold < values.len() {
                prop_assert_eq!(reduced.len(), threshold);
            } else {
                prop_assert_eq!(reduced.len(), values.len());
            }
        }

        /// Anchors are always kept verbatim when reduction happens.
        #[test]
        fn prop_anchors_kept(values in prop::collection::vec(-1e9f64..1e9, 4..256), threshold in 3usize..200) {
            prop_assume!(threshold < values.len());
            let reduced = lttb_values(&values, threshold);
            prop_assert_eq!(reduced[0], values[0]);
            prop_assert_eq!(reduced[reduced.len() - 1], values[values.len() - 1]);
        }
    }
}
