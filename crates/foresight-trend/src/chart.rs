//! Fixed-width chart sampling of a stored series.

/// Reduce `values` to a chart of about `point_count` points.
///
/// Series no longer than `point_count` come back unchanged. Longer ones are
/// sampled at `i·stride + 1` for `i` in `1..point_count`, with
/// `stride = (len − 2) / point_count` in integer arithmetic.
///
/// When `len − 2 < point_count` the stride is zero and every sample repeats
/// index 1. This is long-standing chart behaviour and is kept as is.
pub fn downsample(values: &[f64], point_count: usize) -> Vec<f64> {
    sample_indices(values.len(), point_count)
        .into_iter()
        .map(|i| values[i])
        .collect()
}

/// The indices [`downsample`] reads, for callers sampling a store directly.
///
/// A `point_count` of zero yields no indices.
pub fn sample_indices(count: usize, point_count: usize) -> Vec<usize> {
    if point_count == 0 {
        return Vec::new();
    }
    if count <= point_count {
        return (0..count).collect();
    }
    let stride = (count - 2) / point_count;
    (1..point_count).map(|i| i * stride + 1).collect()
}
