//! CPU affinity hint and spin-wait primitives
//!
//! Affinity is a best-effort hint only; correctness of the ring protocol
//! never depends on pinning succeeding, so every `pin_to_cpu` here returns
//! a `Result` that callers are expected to log and discard.

use crate::error::BenchError;

/// Pin the calling thread to a logical core. Best-effort: failures are
/// reported to the caller as `Err`, never panics.
#[cfg(target_os = "linux")]
pub fn pin_to_cpu(cpu_id: usize) -> Result<(), BenchError> {
    use nix::sched::{sched_setaffinity, CpuSet};
    use nix::unistd::Pid;

    let mut cpu_set = CpuSet::new();
    cpu_set.set(cpu_id).map_err(|e| BenchError::Affinity {
        cpu: cpu_id,
        source: std::io::Error::from(e),
    })?;
    sched_setaffinity(Pid::from_raw(0), &cpu_set).map_err(|e| BenchError::Affinity {
        cpu: cpu_id,
        source: std::io::Error::from(e),
    })
}

#[cfg(target_os = "macos")]
pub fn pin_to_cpu(cpu_id: usize) -> Result<(), BenchError> {
    use libc::{mach_port_t, pthread_self, thread_affinity_policy_data_t, thread_policy_set, THREAD_AFFINITY_POLICY};

    unsafe {
        let mut policy = thread_affinity_policy_data_t { affinity_tag: cpu_id as i32 };
        let result = thread_policy_set(
            pthread_self() as mach_port_t,
            THREAD_AFFINITY_POLICY as u32,
            &mut policy as *mut _ as *mut i32,
            1,
        );
        if result != 0 {
            return Err(BenchError::Affinity {
                cpu: cpu_id,
                source: std::io::Error::last_os_error(),
            });
        }
    }
    Ok(())
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub fn pin_to_cpu(_cpu_id: usize) -> Result<(), BenchError> {
    Ok(())
}

/// CPU pause/yield-on-spin hint. Lowers to `pause` on x86, `yield` on
/// aarch64 via `std::hint::spin_loop`, which already does this portably;
/// kept as a named wrapper so call sites read as "I am spinning", matching
/// the original benchmark's explicit `_mm_pause()` calls.
#[inline(always)]
pub fn pause() {
    std::hint::spin_loop();
}

/// Number of logical CPUs visible to this process, used only for the
/// informational start-of-run banner.
pub fn logical_cpu_count() -> usize {
    num_cpus::get()
}
