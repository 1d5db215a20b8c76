//! CLI entry point
//!
//! Five positional arguments, in order: iterations (millions), read-thread
//! count, write-thread count, read/write-thread count, processing time. No
//! flags, no environment variables, no config files — only `RUST_LOG`
//! governs log verbosity, which is an ambient logging concern, not a
//! benchmark parameter.

use std::process::ExitCode;

use flux_bench::constants::MESSAGES_PER_MILLION;
use flux_bench::run::{run, ConsumerReport, MixedReport, ProducerReport, ReaderStats, RunConfig};
use flux_bench::BenchError;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match RunConfig::parse(&args) {
        Ok(config) => config,
        Err(BenchError::Usage) => {
            println!("{}", BenchError::Usage);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = run(config);

    for report in &outcome.producers {
        print_producer_line(None, report);
    }
    for report in &outcome.consumers {
        print_consumer_lines(report);
    }
    for report in &outcome.mixed {
        print_mixed_lines(report);
    }

    let millis = outcome.elapsed.as_millis().max(1) as f64;
    let rate = outcome.total_writes as f64 / millis * 1000.0 / MESSAGES_PER_MILLION;
    println!("{} write ops, {:.3} million ops/sec", outcome.total_writes, rate);

    ExitCode::SUCCESS
}

fn print_producer_line(index: Option<usize>, report: &ProducerReport) {
    match index {
        None => println!(
            "Written: {:.3} ({}) Retry: {:.3}",
            report.success as f64 / MESSAGES_PER_MILLION,
            report.success,
            report.retry1 as f64 / MESSAGES_PER_MILLION
        ),
        Some(i) => println!(
            "Written {}: {:.3} ({}) Retry: {:.3}",
            i,
            report.success as f64 / MESSAGES_PER_MILLION,
            report.success,
            report.retry1 as f64 / MESSAGES_PER_MILLION
        ),
    }
}

fn print_reader_stats_line(consumer: usize, ring: usize, stats: &ReaderStats) {
    let (count, retry1, retry2, multiskip) = *stats;
    println!(
        "Read {}/{}: {:.3} ({}), Retry: {:.3} {:.3}, Multiskip: {}",
        consumer,
        ring,
        count as f64 / MESSAGES_PER_MILLION,
        count,
        retry1 as f64 / MESSAGES_PER_MILLION,
        retry2 as f64 / MESSAGES_PER_MILLION,
        multiskip
    );
}

fn print_consumer_lines(report: &ConsumerReport) {
    for (ring, stats) in report.per_ring.iter().enumerate() {
        print_reader_stats_line(report.index, ring, stats);
    }
}

fn print_mixed_lines(report: &MixedReport) {
    for (ring, stats) in report.per_ring.iter().enumerate() {
        print_reader_stats_line(report.index, ring, stats);
    }
    print_producer_line(Some(report.index), &report.write);
}
