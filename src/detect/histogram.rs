use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of intensity bins for an 8-bit channel.
pub const BINS: usize = 256;

/// Intensity histogram of an 8-bit channel.
///
/// Index `i` holds the number of samples with intensity exactly `i`; the
/// counts always sum to the number of samples the histogram was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; BINS],
}

impl Histogram {
    /// Counts every sample in a single pass.
    pub fn from_samples(samples: &[u8]) -> Self {
        let mut counts = [0u64; BINS];
        for &sample in samples {
            counts[sample as usize] += 1;
        }
        Self { counts }
    }

    /// Builds a histogram from precomputed counts.
    pub fn from_counts(counts: [u64; BINS]) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> &[u64; BINS] {
        &self.counts
    }

    pub fn count(&self, intensity: u8) -> u64 {
        self.counts[intensity as usize]
    }

    /// Total number of samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of bins with at least one sample.
    pub fn nonzero_bins(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Adjacent `(2k, 2k + 1)` count pairs, `k` in `0..128`.
    pub fn lsb_pairs(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Population standard deviation of the underlying samples.
    ///
    /// Returns 0.0 for an empty histogram.
    pub fn std_dev(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let n = total as f64;
        let mean = self
            .counts
            .iter()
            .enumerate()
            .map(|(value, &count)| value as f64 * count as f64)
            .sum::<f64>()
            / n;
        let variance = self
            .counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(value, &count)| {
                let delta = value as f64 - mean;
                delta * delta * count as f64
            })
            .sum::<f64>()
            / n;
        variance.sqrt()
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            counts: [0u64; BINS],
        }
    }
}

// serde only derives fixed arrays up to 32 elements; go through a sequence.
impl Serialize for Histogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.counts.iter())
    }
}

impl<'de> Deserialize<'de> for Histogram {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<u64>::deserialize(deserializer)?;
        let len = raw.len();
        let counts: [u64; BINS] = raw
            .try_into()
            .map_err(|_| D::Error::custom(format!("histogram must have {BINS} bins, got {len}")))?;
        Ok(Self { counts })
    }
}
