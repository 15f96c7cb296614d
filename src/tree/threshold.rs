//! Candidate threshold drawing.

use std::cmp::Ordering;

use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::Normal;

use super::split::SplitStrategy;

/// Rejection draws allowed before TruncatedNormal falls back to the
/// range midpoint.
const MAX_REJECTION_DRAWS: usize = 64;

/// Draw one candidate threshold from `[min, max]`.
///
/// `pairs` holds the `(feature value, target)` tuples of the current subset.
/// Convention: expensive work (sorting, selection) happens once, when
/// `iteration == 0`; later iterations reuse the reordered buffer. `Best`
/// must therefore be driven with `iteration` counting up from 0.
pub(crate) fn draw_threshold<R: Rng>(
    strategy: SplitStrategy,
    pairs: &mut [(f64, f64)],
    min: f64,
    max: f64,
    iteration: usize,
    rng: &mut R,
) -> f64 {
    match strategy {
        SplitStrategy::Mean => (min + max) / 2.0,
        SplitStrategy::Uniform => {
            if max > min {
                rng.gen_range(min..max)
            } else {
                min
            }
        }
        SplitStrategy::TruncatedNormal => {
            if max > min {
                let mean = (min + max) / 2.0;
                // Three-sigma rule: virtually all mass inside [min, max].
                let sigma = (max - min) / 3.0;
                let normal = Normal::new(mean, sigma).expect("sigma is positive");
                for _ in 0..MAX_REJECTION_DRAWS {
                    let draw = normal.sample(rng);
                    if (min..=max).contains(&draw) {
                        return draw;
                    }
                }
                mean
            } else {
                min
            }
        }
        SplitStrategy::Median => {
            let mid = pairs.len() / 2;
            if iteration == 0 {
                pairs.select_nth_unstable_by(mid, cmp_by_value);
            }
            let mut threshold = pairs[mid].0;
            if pairs.len() % 2 == 0 {
                // Lower middle: the selection left everything <= pairs[mid]
                // in the front half.
                let lower = pairs[..mid]
                    .iter()
                    .map(|p| p.0)
                    .fold(f64::NEG_INFINITY, f64::max);
                threshold = (threshold + lower) / 2.0;
            }
            threshold
        }
        SplitStrategy::Best => {
            if pairs.len() < 2 {
                return min;
            }
            if iteration == 0 {
                pairs.sort_unstable_by(cmp_by_value);
            }
            (pairs[iteration].0 + pairs[iteration + 1].0) / 2.0
        }
    }
}

#[inline]
fn cmp_by_value(a: &(f64, f64), b: &(f64, f64)) -> Ordering {
    a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal)
}
