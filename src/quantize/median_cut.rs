//! Median-cut quantization over sampled colors
//!
//! Buckets are split one at a time along the channel with the widest value range
//! anywhere in the collection. Ties go to the first bucket and, within a bucket, to the
//! first channel in R, G, B order; splitting stops early once every bucket is uniform.

use crate::color::{Channel, Color};
use crate::io::configuration::NEUTRAL_GRAY;

type Bucket = Vec<Color>;

#[derive(Debug, Clone, Copy)]
struct Split {
    bucket: usize,
    channel: Channel,
    range: u8,
}

/// Reduce `samples` to at most `k` representative colors
///
/// Returns a single neutral gray when `samples` is empty. Fewer than `k` colors are
/// returned only when every bucket has collapsed to a single color.
pub fn median_cut(samples: &[Color], k: usize) -> Vec<Color> {
    if samples.is_empty() {
        return vec![Color::new(NEUTRAL_GRAY, NEUTRAL_GRAY, NEUTRAL_GRAY)];
    }

    let mut buckets: Vec<Bucket> = vec![samples.to_vec()];
    while buckets.len() < k {
        let Some(split) = widest_split(&buckets) else {
            break;
        };
        split_bucket(&mut buckets, split);
    }

    buckets.iter().map(|bucket| mean_color(bucket)).collect()
}

/// Value range (max - min) of one channel across a bucket
pub fn channel_range(bucket: &[Color], channel: Channel) -> u8 {
    let (min, max) = bucket
        .iter()
        .map(|&color| channel.of(color))
        .fold((u8::MAX, u8::MIN), |(lo, hi), value| {
            (lo.min(value), hi.max(value))
        });
    max.saturating_sub(min)
}

// None when every bucket is uniform in every channel
fn widest_split(buckets: &[Bucket]) -> Option<Split> {
    let mut best: Option<Split> = None;
    for (bucket, members) in buckets.iter().enumerate() {
        for channel in Channel::ALL {
            let range = channel_range(members, channel);
            // Strictly greater keeps the first candidate on ties
            if range > best.map_or(0, |split| split.range) {
                best = Some(Split {
                    bucket,
                    channel,
                    range,
                });
            }
        }
    }
    best
}

fn split_bucket(buckets: &mut Vec<Bucket>, split: Split) {
    let mut lower = buckets.remove(split.bucket);
    // Stable sort: equal channel values keep sample order
    lower.sort_by_key(|&color| split.channel.of(color));
    let upper = lower.split_off(lower.len() / 2);

    let mut position = split.bucket;
    for half in [lower, upper] {
        if !half.is_empty() {
            buckets.insert(position, half);
            position += 1;
        }
    }
}

/// Per-channel mean rounded half up
pub fn mean_color(bucket: &[Color]) -> Color {
    let count = bucket.len().max(1) as u64;
    let mean = |channel: Channel| {
        let sum: u64 = bucket.iter().map(|&color| u64::from(channel.of(color))).sum();
        ((2 * sum + count) / (2 * count)) as u8
    };
    Color::new(
        mean(Channel::Red),
        mean(Channel::Green),
        mean(Channel::Blue),
    )
}
