//! End-to-end scenarios, one per literal CLI input from the testable
//! properties list. Total iteration counts are kept small so the suite
//! completes quickly; the arithmetic (`Total/W + 1`, `Total/M/10 * 10`)
//! is exercised at the same scale the full benchmark would use it at.

use flux_bench::run::{run, RunConfig};

fn config(total_iterations: u64, r: usize, w: usize, m: usize, processing_time: u64) -> RunConfig {
    RunConfig { total_iterations, read_threads: r, write_threads: w, read_write_threads: m, processing_time }
}

#[test]
fn one_producer_one_consumer_exits_with_exact_write_count() {
    // args = 1 1 1 0 0, scaled down: iterations_millions -> total_iterations directly.
    let outcome = run(config(1_000, 1, 1, 0, 0));
    assert_eq!(outcome.total_writes, 1_001); // 1_000/1 + 1
    assert_eq!(outcome.producers[0].success, 1_001);
}

#[test]
fn zero_iterations_one_producer_no_consumer() {
    // args = 1 0 1 0 0 with iterations_millions = 0 (the only terminating case
    // for a producer with no consumer and no ring drain).
    let outcome = run(config(0, 0, 1, 0, 0));
    assert_eq!(outcome.total_writes, 1);
    assert!(outcome.consumers.is_empty());
}

#[test]
fn zero_iterations_one_consumer_one_producer() {
    // args = 0 1 1 0 0
    let outcome = run(config(0, 1, 1, 0, 0));
    assert_eq!(outcome.total_writes, 1);
}

#[test]
fn two_producers_two_consumers_rotate_and_conserve_total() {
    // args = 1 2 2 0 0, scaled down.
    let outcome = run(config(2_000, 2, 2, 0, 0));
    assert_eq!(outcome.total_writes, 2 * (2_000 / 2 + 1));
    assert_eq!(outcome.consumers.len(), 2);
    for consumer in &outcome.consumers {
        assert_eq!(consumer.per_ring.len(), 2);
    }
}

#[test]
fn mixed_workers_on_their_own_rings_conserve_their_own_total() {
    // args = 10 0 0 2 0, scaled down.
    let outcome = run(config(200_000, 0, 0, 2, 0));
    assert_eq!(outcome.total_writes, 2 * 100_000);
    assert_eq!(outcome.mixed.len(), 2);
    // Each mixed worker is the sole writer and a reader of its own ring,
    // so it must see at least some of its own publishes.
    for worker in &outcome.mixed {
        let claimed: u64 = worker.per_ring.iter().map(|(count, ..)| count).sum();
        assert!(claimed > 0, "mixed worker never observed its own publishes");
    }
}

#[test]
fn slow_consumer_does_not_prevent_producer_completion() {
    // args = 1 1 1 0 1000, scaled down. Asserts termination, not latency.
    let outcome = run(config(20_000, 1, 1, 0, 200));
    assert_eq!(outcome.total_writes, 20_000 / 1 + 1);
}

#[test]
fn no_producers_and_no_mixed_workers_is_a_well_defined_noop() {
    let outcome = run(config(1_000, 1, 0, 0, 0));
    assert_eq!(outcome.total_writes, 0);
    assert_eq!(outcome.consumers.len(), 1);
}

#[test]
fn reads_never_duplicate_or_exceed_what_was_published() {
    // With a single producer and single consumer, the claimed sequence must
    // be duplicate-free (spec property 3): every claim is a strictly
    // increasing slot value.
    let outcome = run(config(5_000, 1, 1, 0, 0));
    let (count, _, _, _) = outcome.consumers[0].per_ring[0];
    assert!(count <= outcome.producers[0].success);
}
