//! Median-cut color quantizer.
//!
//! Works on the histogram rather than individual pixels: each entry is a
//! distinct color with its population. The color cube is split recursively —
//! always the most populous splittable bucket, along its longest channel
//! axis, at the weighted median — until the requested bucket count is
//! reached or every bucket holds a single distinct color. Every step is
//! deterministic for identical input.

/// One region of the color cube: a range into the shared histogram slice.
#[derive(Debug, Clone, Copy)]
struct Bucket {
    start: usize,
    len: usize,
    population: u64,
}

impl Bucket {
    fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }
}

fn population(entries: &[([u8; 3], u32)]) -> u64 {
    entries.iter().map(|&(_, count)| count as u64).sum()
}

/// Channel index (0 = r, 1 = g, 2 = b) with the widest value range.
/// Ties keep the lowest index.
fn longest_axis(entries: &[([u8; 3], u32)]) -> usize {
    let mut min = [u8::MAX; 3];
    let mut max = [u8::MIN; 3];
    for &(color, _) in entries {
        for ch in 0..3 {
            min[ch] = min[ch].min(color[ch]);
            max[ch] = max[ch].max(color[ch]);
        }
    }
    let ranges = [max[0] - min[0], max[1] - min[1], max[2] - min[2]];
    let mut axis = 0;
    for ch in 1..3 {
        if ranges[ch] > ranges[axis] {
            axis = ch;
        }
    }
    axis
}

/// Split one bucket at the weighted median of its longest axis.
///
/// The slice is re-sorted by (axis value, full channel key); the secondary
/// key pins the order of entries that share an axis value. Both halves are
/// guaranteed non-empty.
fn split(entries: &mut [([u8; 3], u32)], bucket: Bucket) -> (Bucket, Bucket) {
    let slice = &mut entries[bucket.range()];
    let axis = longest_axis(slice);
    slice.sort_unstable_by_key(|&(color, _)| (color[axis], color));

    let half = bucket.population / 2;
    let mut accumulated = 0u64;
    let mut cut = 0usize;
    for (i, &(_, count)) in slice.iter().enumerate() {
        accumulated += count as u64;
        if accumulated >= half {
            cut = i + 1;
            break;
        }
    }
    // Both halves must stay non-empty for the split to make progress
    let cut = cut.clamp(1, bucket.len - 1);

    let left_population = population(&slice[..cut]);
    let left = Bucket {
        start: bucket.start,
        len: cut,
        population: left_population,
    };
    let right = Bucket {
        start: bucket.start + cut,
        len: bucket.len - cut,
        population: bucket.population - left_population,
    };
    (left, right)
}

/// Population-weighted mean color of a bucket, rounded per channel.
fn average(entries: &[([u8; 3], u32)], total: u64) -> [u8; 3] {
    let mut sums = [0u64; 3];
    for &(color, count) in entries {
        for ch in 0..3 {
            sums[ch] += color[ch] as u64 * count as u64;
        }
    }
    let mut avg = [0u8; 3];
    for ch in 0..3 {
        // Round to nearest: add half the divisor before dividing
        avg[ch] = ((sums[ch] + total / 2) / total) as u8;
    }
    avg
}

/// Quantize a histogram into at most `k` buckets.
///
/// Returns `(mean color, population)` pairs ordered by descending
/// population; ties break by channel key so the ordering is an observable,
/// deterministic contract. A histogram with fewer than `k` distinct colors
/// yields one bucket per color.
pub(crate) fn quantize(entries: &mut [([u8; 3], u32)], k: usize) -> Vec<([u8; 3], u64)> {
    if entries.is_empty() || k == 0 {
        return Vec::new();
    }

    let total = population(entries);
    let mut buckets = vec![Bucket {
        start: 0,
        len: entries.len(),
        population: total,
    }];

    while buckets.len() < k {
        // Most populous bucket that still spans more than one distinct color
        let candidate = buckets
            .iter()
            .enumerate()
            .filter(|(_, b)| b.len > 1)
            .max_by(|(ai, a), (bi, b)| {
                a.population.cmp(&b.population).then(bi.cmp(ai))
            })
            .map(|(i, _)| i);

        let Some(index) = candidate else { break };
        let bucket = buckets.swap_remove(index);
        let (left, right) = split(entries, bucket);
        buckets.push(left);
        buckets.push(right);
    }

    let mut result: Vec<([u8; 3], u64)> = buckets
        .iter()
        .map(|b| (average(&entries[b.range()], b.population), b.population))
        .collect();
    result.sort_unstable_by(|&(color_a, pop_a), &(color_b, pop_b)| {
        pop_b.cmp(&pop_a).then(color_a.cmp(&color_b))
    });
    result
}
