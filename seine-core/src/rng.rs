//! Seed-derivation utilities for independent random streams.

/// SplitMix64 increment (the 64-bit golden ratio) used for per-stream seed
/// derivation.
const STREAM_SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Derives a well-separated seed for the `stream`-th random stream rooted at
/// `base_seed`. Sweep iterations use this so repeated runs are reproducible
/// without correlating the per-iteration graphs.
#[inline]
pub(crate) fn mix_stream_seed(base_seed: u64, stream: u64) -> u64 {
    splitmix64(base_seed ^ (stream.wrapping_add(1).wrapping_mul(STREAM_SEED_SPACING)))
}

#[inline]
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(STREAM_SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_seeds_are_stable_and_distinct() {
        let first = mix_stream_seed(42, 0);
        assert_eq!(first, mix_stream_seed(42, 0));
        assert_ne!(first, mix_stream_seed(42, 1));
        assert_ne!(first, mix_stream_seed(43, 0));
    }

    #[test]
    fn adjacent_streams_do_not_collide_over_a_long_run() {
        let mut seen = std::collections::HashSet::new();
        for stream in 0..10_000u64 {
            assert!(seen.insert(mix_stream_seed(7, stream)));
        }
    }
}
