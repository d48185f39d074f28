//! Per-parse latency and throughput from timed rounds.
//!
//! A round is one pass over the whole corpus, so a round time says nothing
//! about a single parse until it is divided by the corpus size. Percentiles
//! are taken over those per-parse round averages with the nearest-rank method.

use std::time::Duration;

/// Latency of one parse in nanoseconds, plus overall throughput.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyStats {
    pub avg_ns: f64,
    pub p50_ns: f64,
    pub p95_ns: f64,
    pub p99_ns: f64,
    /// Parses per second over all rounds together.
    pub parses_per_sec: f64,
}

impl LatencyStats {
    /// Summarises `rounds`, each of which parsed `parses_per_round` inputs.
    ///
    /// `None` when there is nothing to summarise.
    pub fn from_rounds(rounds: &[Duration], parses_per_round: usize) -> Option<Self> {
        if rounds.is_empty() || parses_per_round == 0 {
            return None;
        }

        let per_parse = |d: &Duration| d.as_nanos() as f64 / parses_per_round as f64;
        let mut sorted: Vec<f64> = rounds.iter().map(per_parse).collect();
        sorted.sort_by(f64::total_cmp);

        let total: Duration = rounds.iter().sum();
        let total_parses = (rounds.len() * parses_per_round) as f64;
        let parses_per_sec = if total.is_zero() {
            f64::INFINITY
        } else {
            total_parses / total.as_secs_f64()
        };

        Some(Self {
            avg_ns: sorted.iter().sum::<f64>() / sorted.len() as f64,
            p50_ns: nearest_rank(&sorted, 50),
            p95_ns: nearest_rank(&sorted, 95),
            p99_ns: nearest_rank(&sorted, 99),
            parses_per_sec,
        })
    }

    /// How many times faster this is than `baseline`, by average latency.
    pub fn speedup_over(&self, baseline: &LatencyStats) -> f64 {
        if self.avg_ns > 0.0 {
            baseline.avg_ns / self.avg_ns
        } else {
            0.0
        }
    }
}

/// Smallest sample with at least `percent`% of the samples at or below it.
/// `sorted` must be non-empty and ascending.
fn nearest_rank(sorted: &[f64], percent: usize) -> f64 {
    let rank = (percent * sorted.len()).div_ceil(100).max(1);
    sorted[rank.min(sorted.len()) - 1]
}

/// Groups decimal digits in threes: `1234567` becomes `1,234,567`.
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|group| std::str::from_utf8(group).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
}
