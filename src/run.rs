//! Run coordinator: owns the Rings, the start barrier, and the
//! producer-completion signal that bounds one benchmark run.
//!
//! Per the crate's design note (see `SPEC_FULL.md` §9): no process-wide
//! global state. A `RunConfig` is threaded explicitly through every
//! worker; the only state actually shared across threads is
//! `running_writers`, `start_gate`, `total_writes`, and the Rings
//! themselves, all owned by this module for the run's duration.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use crate::constants::{MIXED_BURST_SIZE, RING_CAPACITY};
use crate::cpu::{pause, pin_to_cpu};
use crate::disruptor::{MultiReader, Ring, Writer, NOTHING_TO_READ};
use crate::error::BenchError;

/// Parsed command-line configuration for one run.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// `1_000_000 * iterations_millions`, total writes spread across `W`.
    pub total_iterations: u64,
    /// `R`: consumer-only worker count.
    pub read_threads: usize,
    /// `W`: producer-only worker count, one Ring each.
    pub write_threads: usize,
    /// `M`: mixed read/write worker count, one Ring each.
    pub read_write_threads: usize,
    /// Pause-loop iterations a consumer runs after each successful read.
    pub processing_time: u64,
}

impl RunConfig {
    /// Parse the five positional CLI arguments. Any parse failure or wrong
    /// argument count is reported as [`BenchError::Usage`].
    pub fn parse(args: &[String]) -> Result<Self, BenchError> {
        if args.len() != 5 {
            return Err(BenchError::Usage);
        }
        let field = |s: &str| s.parse::<u64>().map_err(|_| BenchError::Usage);

        let iterations_millions = field(&args[0])?;
        let read_threads = field(&args[1])? as usize;
        let write_threads = field(&args[2])? as usize;
        let read_write_threads = field(&args[3])? as usize;
        let processing_time = field(&args[4])?;

        Ok(Self {
            total_iterations: 1_000_000 * iterations_millions,
            read_threads,
            write_threads,
            read_write_threads,
            processing_time,
        })
    }
}

/// Per-ring claim stats as reported by one `Reader`: `(count, retry1,
/// retry2, multiskip)`.
pub type ReaderStats = (u64, u64, u64, u64);

pub struct ProducerReport {
    pub success: u64,
    pub retry1: u64,
}

pub struct ConsumerReport {
    pub index: usize,
    pub per_ring: Vec<ReaderStats>,
}

pub struct MixedReport {
    pub index: usize,
    pub write: ProducerReport,
    pub per_ring: Vec<ReaderStats>,
}

pub struct RunOutcome {
    pub total_writes: u64,
    pub elapsed: Duration,
    pub producers: Vec<ProducerReport>,
    pub consumers: Vec<ConsumerReport>,
    pub mixed: Vec<MixedReport>,
}

/// Drive one complete run: allocate the Rings, spawn every worker, align
/// them on the start gate, join, and return every worker's report plus the
/// aggregate throughput.
pub fn run(config: RunConfig) -> RunOutcome {
    let producer_rings: Vec<Ring> = (0..config.write_threads)
        .map(|_| Ring::new(RING_CAPACITY).expect("RING_CAPACITY is always a valid power of two"))
        .collect();
    let mixed_rings: Vec<Ring> = (0..config.read_write_threads)
        .map(|_| Ring::new(RING_CAPACITY).expect("RING_CAPACITY is always a valid power of two"))
        .collect();

    let running_writers = AtomicUsize::new(config.write_threads);
    let start_gate = AtomicBool::new(false);
    let total_writes = AtomicU64::new(0);

    let producer_total = if config.write_threads > 0 {
        config.total_iterations / config.write_threads as u64 + 1
    } else {
        0
    };
    let mixed_iterations = if config.read_write_threads > 0 {
        config.total_iterations / config.read_write_threads as u64 / MIXED_BURST_SIZE
    } else {
        0
    };

    tracing::info!(
        total_iterations = config.total_iterations,
        read_threads = config.read_threads,
        write_threads = config.write_threads,
        read_write_threads = config.read_write_threads,
        processing_time = config.processing_time,
        logical_cpus = crate::cpu::logical_cpu_count(),
        "starting run"
    );

    let (producers, consumers, mixed, elapsed) = std::thread::scope(|scope| {
        let mut producer_handles = Vec::with_capacity(config.write_threads);
        for i in 0..config.write_threads {
            let ring = &producer_rings[i];
            let running_writers = &running_writers;
            let total_writes = &total_writes;
            let start_gate = &start_gate;
            producer_handles.push(scope.spawn(move || {
                pin_best_effort(i);
                wait_for_start(start_gate);

                let mut writer = Writer::new(ring);
                let mut success = 0u64;
                for _ in 0..producer_total {
                    writer.write();
                    success += 1;
                }
                running_writers.fetch_sub(1, Ordering::Relaxed);
                total_writes.fetch_add(success, Ordering::Relaxed);
                ProducerReport { success, retry1: writer.retry1 }
            }));
        }

        let mut consumer_handles = Vec::with_capacity(config.read_threads);
        for c in 0..config.read_threads {
            let rings: &[Ring] = &producer_rings;
            let running_writers = &running_writers;
            let start_gate = &start_gate;
            let processing_time = config.processing_time;
            let write_threads = config.write_threads;
            consumer_handles.push(scope.spawn(move || {
                pin_best_effort(c + write_threads);
                wait_for_start(start_gate);

                let mut mr = MultiReader::new(rings, c);
                loop {
                    let value = mr.read();
                    if value != NOTHING_TO_READ {
                        wait_pause(processing_time);
                    } else if running_writers.load(Ordering::Relaxed) == 0 {
                        // Final non-blocking probe already happened above;
                        // every producer is done and this round was empty.
                        break;
                    } else {
                        pause();
                    }
                }
                ConsumerReport { index: c, per_ring: mr.reader_stats().collect() }
            }));
        }

        let mut mixed_handles = Vec::with_capacity(config.read_write_threads);
        for m in 0..config.read_write_threads {
            let ring = &mixed_rings[m];
            let rings: &[Ring] = &mixed_rings;
            let total_writes = &total_writes;
            let start_gate = &start_gate;
            let processing_time = config.processing_time;
            mixed_handles.push(scope.spawn(move || {
                pin_best_effort(m);
                wait_for_start(start_gate);

                let mut writer = Writer::new(ring);
                let mut mr = MultiReader::new(rings, m);
                let mut write_success = 0u64;
                for _ in 0..mixed_iterations {
                    for _ in 0..MIXED_BURST_SIZE {
                        writer.write();
                        write_success += 1;
                    }
                    for _ in 0..MIXED_BURST_SIZE {
                        mr.blocking_read();
                        wait_pause(processing_time);
                    }
                }
                total_writes.fetch_add(write_success, Ordering::Relaxed);
                MixedReport {
                    index: m,
                    write: ProducerReport { success: write_success, retry1: writer.retry1 },
                    per_ring: mr.reader_stats().collect(),
                }
            }));
        }

        start_gate.store(true, Ordering::Release);
        let start = Instant::now();

        let producers: Vec<_> = producer_handles.into_iter().map(|h| h.join().expect("producer panicked")).collect();
        let consumers: Vec<_> = consumer_handles.into_iter().map(|h| h.join().expect("consumer panicked")).collect();
        let mixed: Vec<_> = mixed_handles.into_iter().map(|h| h.join().expect("mixed worker panicked")).collect();

        (producers, consumers, mixed, start.elapsed())
    });

    RunOutcome {
        total_writes: total_writes.load(Ordering::Relaxed),
        elapsed,
        producers,
        consumers,
        mixed,
    }
}

fn pin_best_effort(cpu: usize) {
    if let Err(e) = pin_to_cpu(cpu) {
        tracing::warn!(cpu, error = %e, "cpu affinity pinning failed, continuing unpinned");
    }
}

fn wait_for_start(gate: &AtomicBool) {
    while !gate.load(Ordering::Acquire) {
        pause();
    }
}

fn wait_pause(count: u64) {
    for _ in 0..count {
        pause();
    }
}
