//! Exhaustive polynomial sweep and scoring
//!
//! Drives [`Crc32`] engine construction across an inclusive polynomial range,
//! testing four fixed (output-XOR, initial value) combinations per candidate
//! against all known samples. Each combination's score is the number of
//! samples it reproduces; any score of one or more is retained.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};

use super::crc32::Crc32;
use super::samples::KnownSample;

/// One (initial value, output-XOR) parameter combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchParams {
    /// Final bitwise complement applied to the computed checksum.
    pub xorout: bool,
    /// Starting value of the checksum register, 0 or all-ones.
    pub init: u32,
}

impl SearchParams {
    /// The four combinations tested per polynomial, in sweep order.
    pub const ALL: [SearchParams; 4] = [
        SearchParams { xorout: true, init: 0 },
        SearchParams { xorout: false, init: u32::MAX },
        SearchParams { xorout: false, init: 0 },
        SearchParams { xorout: true, init: u32::MAX },
    ];
}

/// Key identifying one retained result: a polynomial plus the parameter
/// combination that scored under it.
///
/// Renders as `<polynomial uppercase hex, unpadded> <xorout> <init decimal>`,
/// the key format used in result files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScoreKey {
    /// The candidate generator polynomial.
    pub polynomial: u32,
    /// The parameter combination.
    pub params: SearchParams,
}

impl fmt::Display for ScoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:X} {} {}",
            self.polynomial, self.params.xorout, self.params.init
        )
    }
}

/// Accumulated scores: retained key to number of matched samples.
///
/// Ordered so that reports are reproducible regardless of how the range was
/// split across runs.
pub type ScoreMap = BTreeMap<ScoreKey, u32>;

/// Result of a (possibly interrupted) sweep.
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    /// Every combination that matched at least one sample.
    pub scores: ScoreMap,
    /// Number of polynomials actually tested.
    pub tested: u64,
    /// First untested polynomial when the sweep was cancelled, suitable as
    /// the start offset of a resumed run. `None` when the range completed.
    pub resume_at: Option<u32>,
}

/// Sweep `range` (inclusive at both ends), scoring every polynomial against
/// `samples` under the four fixed parameter combinations.
///
/// `progress` is invoked with each candidate polynomial before it is tested.
/// `cancel` is checked once per polynomial; when it becomes true the sweep
/// stops and reports the untested remainder via [`SweepOutcome::resume_at`].
///
/// The accumulator is local to the call and returned in the outcome, so
/// disjoint sub-ranges can be swept independently (or resumed after an
/// interruption) and combined with [`merge`].
pub fn sweep(
    samples: &[KnownSample],
    range: RangeInclusive<u32>,
    cancel: &AtomicBool,
    mut progress: impl FnMut(u32),
) -> SweepOutcome {
    let mut scores = ScoreMap::new();
    let mut tested = 0u64;
    let mut resume_at = None;

    // RangeInclusive iterates to the top of the u32 space without overflow.
    for polynomial in range {
        if cancel.load(Ordering::Relaxed) {
            resume_at = Some(polynomial);
            break;
        }
        progress(polynomial);

        let crc = Crc32::new(polynomial);
        for params in SearchParams::ALL {
            let hits = samples
                .iter()
                .filter(|sample| crc.matches(sample.check, &sample.bytes, params.init, params.xorout))
                .count() as u32;
            if hits > 0 {
                scores.insert(ScoreKey { polynomial, params }, hits);
            }
        }
        tested += 1;
    }

    SweepOutcome { scores, tested, resume_at }
}

/// Fold the scores from one partial sweep into another.
///
/// Keys are unique per (polynomial, combination), so merging results from
/// disjoint ranges never collides; identical keys from overlapping ranges
/// carry identical counts and the overwrite is a no-op.
pub fn merge(into: &mut ScoreMap, part: ScoreMap) {
    into.extend(part);
}
