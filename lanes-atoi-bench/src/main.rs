//! Benchmark comparison: SWAR decimal parsing vs scalar parsing
//!
//! Parses a seeded corpus of decimal strings with the log-depth SWAR decoder,
//! a naive one-digit-at-a-time loop, and `str::parse`. Verifies that all three
//! agree, as `u64` and as `i64`, before timing anything. Then reports per-parse
//! latency percentiles (avg, p50, p95, p99) and throughput in a console table.

mod atoi;
mod corpus;
mod stats;
mod verification;

use std::fmt::Debug;
use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Result};
use clap::Parser;

use crate::atoi::{parse_i64_naive, parse_i64_swar, parse_u64_naive, parse_u64_swar};
use crate::corpus::{count_digits, generate_corpus, malformed_inputs};
use crate::stats::{format_number, LatencyStats};
use crate::verification::{verify_against_std, verify_rejections, VerificationReport};

#[derive(Parser, Debug)]
#[command(name = "lanes-atoi-bench")]
#[command(about = "Benchmark SWAR decimal parsing against scalar parsers")]
struct Args {
    /// Number of strings in the corpus
    #[arg(long, default_value_t = 100_000)]
    count: usize,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Maximum significant digits per string (1 to 20)
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u32).range(1..=20))]
    digits: u32,

    /// Timed rounds over the whole corpus per parser
    #[arg(long, default_value_t = 50)]
    iterations: usize,

    /// Only run the correctness verification
    #[arg(long)]
    verify_only: bool,
}

/// One parser under test.
struct Contender {
    name: &'static str,
    parse: fn(&str) -> Option<u64>,
}

fn swar(s: &str) -> Option<u64> {
    parse_u64_swar(s.as_bytes()).ok()
}

fn naive(s: &str) -> Option<u64> {
    parse_u64_naive(s.as_bytes()).ok()
}

fn std_parse(s: &str) -> Option<u64> {
    s.trim_start().parse::<u64>().ok()
}

const CONTENDERS: [Contender; 3] = [
    Contender { name: "lanes-core SWAR", parse: swar },
    Contender { name: "naive loop", parse: naive },
    Contender { name: "str::parse", parse: std_parse },
];

/// Times `iterations` full passes over the corpus.
fn time_rounds(contender: &Contender, corpus: &[String], iterations: usize) -> Vec<Duration> {
    // Warmup
    for s in corpus {
        black_box((contender.parse)(black_box(s)));
    }

    let mut rounds = Vec::with_capacity(iterations);
    for round in 0..iterations {
        let start = Instant::now();
        let mut checksum = 0u64;
        for s in corpus {
            checksum = checksum.wrapping_add((contender.parse)(black_box(s)).unwrap_or(0));
        }
        black_box(checksum);
        rounds.push(start.elapsed());
        log::trace!("{} round {} done", contender.name, round);
    }
    rounds
}

fn report_failures<T: Debug>(title: &str, report: &VerificationReport<T>) {
    println!("  {}: {} checked, {} mismatches", title, format_number(report.checked), report.mismatches.len());
    for m in report.mismatches.iter().take(10) {
        println!(
            "    {:?}: swar={:?} naive={:?} std={:?}",
            m.input, m.swar, m.naive, m.std
        );
    }
}

fn print_results(results: &[(&str, LatencyStats)], corpus_len: usize, digits: usize) {
    println!();
    println!("{}", "=".repeat(79));
    println!(
        "Per-parse latency over {} strings ({} digits, {:.1} digits/string)",
        format_number(corpus_len),
        format_number(digits),
        digits as f64 / corpus_len.max(1) as f64
    );
    println!("{}", "=".repeat(79));
    println!(
        "{:<18} {:>9} {:>9} {:>9} {:>9} {:>10} {:>8}",
        "Parser", "avg (ns)", "p50 (ns)", "p95 (ns)", "p99 (ns)", "Mparse/s", "speedup"
    );
    println!("{}", "-".repeat(79));

    let Some((_, baseline)) = results.last() else {
        return;
    };
    for (name, s) in results {
        println!(
            "{:<18} {:>9.2} {:>9.2} {:>9.2} {:>9.2} {:>10.1} {:>7.2}x",
            name,
            s.avg_ns,
            s.p50_ns,
            s.p95_ns,
            s.p99_ns,
            s.parses_per_sec / 1e6,
            s.speedup_over(baseline)
        );
    }
    println!();
    println!("Speedup is relative to str::parse.");
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let max_digits = args.digits as usize;

    println!("Benchmark: lanes-core SWAR parsing vs scalar parsers");
    println!("Corpus: {} strings, up to {} digits, seed {}", format_number(args.count), max_digits, args.seed);

    log::info!("generating corpus");
    let corpus = generate_corpus(args.count, max_digits, args.seed);
    let digits = count_digits(&corpus);
    log::debug!("corpus holds {} digit bytes", digits);

    // Correctness before speed.
    println!();
    println!("Verification");
    let malformed = malformed_inputs();
    let unsigned = verify_against_std(&corpus, parse_u64_swar, parse_u64_naive);
    report_failures("u64 corpus vs str::parse", &unsigned);
    let signed = verify_against_std(&corpus, parse_i64_swar, parse_i64_naive);
    report_failures("i64 corpus vs str::parse", &signed);
    let unsigned_rejected = verify_rejections(&malformed, parse_u64_swar, parse_u64_naive);
    report_failures("u64 malformed inputs", &unsigned_rejected);
    let signed_rejected = verify_rejections(&malformed, parse_i64_swar, parse_i64_naive);
    report_failures("i64 malformed inputs", &signed_rejected);

    let corpus_mismatches = unsigned.mismatches.len() + signed.mismatches.len();
    let rejection_mismatches = unsigned_rejected.mismatches.len() + signed_rejected.mismatches.len();
    if corpus_mismatches + rejection_mismatches > 0 {
        bail!(
            "verification failed: {} corpus mismatches, {} inconsistent rejections",
            corpus_mismatches,
            rejection_mismatches
        );
    }
    println!("  All parsers agree; {} malformed inputs rejected.", malformed.len());

    if args.verify_only {
        return Ok(());
    }

    let mut results = Vec::with_capacity(CONTENDERS.len());
    for contender in &CONTENDERS {
        log::info!("timing {} ({} rounds)", contender.name, args.iterations);
        let rounds = time_rounds(contender, &corpus, args.iterations);
        let stats = LatencyStats::from_rounds(&rounds, corpus.len())
            .ok_or_else(|| anyhow!("no timed rounds for {}", contender.name))?;
        results.push((contender.name, stats));
    }

    print_results(&results, corpus.len(), digits);
    Ok(())
}
