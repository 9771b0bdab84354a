// ---------------------------------------------------------------------------
// Summary aggregates for the main page
// ---------------------------------------------------------------------------

/// Default bin count limit for the histograms.
pub const DEFAULT_MAX_BINS: usize = 10;

/// Mean of the present values. `None` when nothing is present, so callers
/// can show a blank stat instead of a bogus zero.
pub fn mean(values: &[u64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().map(|&v| v as f64).sum();
    Some(sum / values.len() as f64)
}

/// One histogram bin covering `[lo, hi)`; the last bin includes `hi`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    pub bins: Vec<Bin>,
}

/// Equal-width binned counts with a "nice" step (1/2/5 × 10^k) chosen so
/// the span fits in at most `max_bins` steps. Bin edges align to multiples
/// of the step, which can add one extra bin after alignment.
pub fn histogram(values: &[u64], max_bins: usize) -> Histogram {
    if values.is_empty() || max_bins == 0 {
        return Histogram::default();
    }

    let min = *values.iter().min().unwrap() as f64;
    let max = *values.iter().max().unwrap() as f64;
    let step = nice_step(max - min, max_bins);
    let origin = (min / step).floor() * step;
    let n_bins = ((max - origin) / step).floor() as usize + 1;

    let mut bins: Vec<Bin> = (0..n_bins)
        .map(|i| Bin {
            lo: origin + i as f64 * step,
            hi: origin + (i + 1) as f64 * step,
            count: 0,
        })
        .collect();

    for &v in values {
        let idx = (((v as f64 - origin) / step).floor() as usize).min(n_bins - 1);
        bins[idx].count += 1;
    }

    Histogram { bins }
}

/// Smallest of 1, 2, 5, 10 × 10^k that covers `span` in `max_bins` steps.
fn nice_step(span: f64, max_bins: usize) -> f64 {
    if span <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf((span / max_bins as f64).log10().floor());
    for mult in [1.0, 2.0, 5.0, 10.0] {
        let step = mult * magnitude;
        if span / step <= max_bins as f64 {
            return step;
        }
    }
    10.0 * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_present_values() {
        assert_eq!(mean(&[500]), Some(500.0));
        assert_eq!(mean(&[100, 200, 600]), Some(300.0));
    }

    #[test]
    fn mean_of_nothing_is_none() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn histogram_picks_a_nice_step() {
        // 20 values spanning 0..95: raw width 9.5 rounds up to step 10.
        let values: Vec<u64> = (0..20).map(|i| i * 5).collect();
        let hist = histogram(&values, DEFAULT_MAX_BINS);

        assert_eq!(hist.bins.len(), 10);
        assert_eq!(hist.bins[0].lo, 0.0);
        assert_eq!(hist.bins[0].hi, 10.0);
        assert!(hist.bins.iter().all(|b| b.count == 2));
    }

    #[test]
    fn histogram_counts_every_value_once() {
        let values = [3u64, 14, 14, 92, 250, 251, 999];
        let hist = histogram(&values, DEFAULT_MAX_BINS);
        let total: usize = hist.bins.iter().map(|b| b.count).sum();
        assert_eq!(total, values.len());
    }

    #[test]
    fn identical_values_land_in_one_bin() {
        let hist = histogram(&[7, 7, 7], DEFAULT_MAX_BINS);
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.bins[0].count, 3);
        assert_eq!(hist.bins[0].lo, 7.0);
    }

    #[test]
    fn empty_input_yields_empty_histogram() {
        assert_eq!(histogram(&[], DEFAULT_MAX_BINS), Histogram::default());
    }

    #[test]
    fn maximum_value_is_included_in_the_last_bin() {
        let values = [0u64, 100];
        let hist = histogram(&values, DEFAULT_MAX_BINS);
        let last = hist.bins.last().unwrap();
        assert_eq!(last.count, 1);
    }
}
