// Moving average - Fixed-window smoothing of frame times

/// Samples per window. Captures are sampled every 0.5 s, so this is a
/// 5-second average.
pub const DEFAULT_WINDOW: usize = 10;

/// Nominal spacing between capture samples, in seconds.
pub const NOMINAL_SAMPLE_INTERVAL_SECS: f64 = 0.5;

/// Trailing simple moving average.
///
/// The output is aligned 1:1 with the input. Index `i` is the mean of
/// `series[i + 1 - window ..= i]`; near the start, where fewer than `window`
/// samples exist, the mean is taken over the samples seen so far instead of
/// dropping the position. A NaN anywhere in a window makes that output NaN.
///
/// A `window` of 0 behaves like 1.
pub fn smooth(series: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);

    (0..series.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &series[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

/// Length of a `window`-sample average in seconds at the nominal sample rate.
pub fn window_seconds(window: usize) -> f64 {
    window.max(1) as f64 * NOMINAL_SAMPLE_INTERVAL_SECS
}
