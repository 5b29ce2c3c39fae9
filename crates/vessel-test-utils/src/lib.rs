//! Test utilities for Vessel development.
//!
//! Provides [`Probe`], an element type that records every construction and
//! destruction in a per-thread ledger and can be armed to panic on its
//! k-th clone or k-th default construction. Container tests use it to
//! check that no operation leaks or double-drops, including when an
//! element operation panics part-way through.
//!
//! The ledger is thread-local so tests running in parallel do not see
//! each other's counts. Call [`ledger::reset`] at the start of a test.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::fmt;

struct Ledger {
    live: Cell<isize>,
    clones: Cell<usize>,
    defaults: Cell<usize>,
    clone_fuse: Cell<Option<usize>>,
    default_fuse: Cell<Option<usize>>,
}

thread_local! {
    static LEDGER: Ledger = const {
        Ledger {
            live: Cell::new(0),
            clones: Cell::new(0),
            defaults: Cell::new(0),
            clone_fuse: Cell::new(None),
            default_fuse: Cell::new(None),
        }
    };
}

/// Per-thread counters and failure fuses for [`Probe`].
pub mod ledger {
    use super::LEDGER;

    /// Zero every counter and disarm both fuses.
    pub fn reset() {
        LEDGER.with(|l| {
            l.live.set(0);
            l.clones.set(0);
            l.defaults.set(0);
            l.clone_fuse.set(None);
            l.default_fuse.set(None);
        });
    }

    /// Probes constructed minus probes dropped since the last reset.
    ///
    /// Negative means something was dropped twice.
    pub fn live() -> isize {
        LEDGER.with(|l| l.live.get())
    }

    /// Clones performed since the last reset or arming.
    pub fn clones() -> usize {
        LEDGER.with(|l| l.clones.get())
    }

    /// Default constructions since the last reset or arming.
    pub fn defaults() -> usize {
        LEDGER.with(|l| l.defaults.get())
    }

    /// Make the `k`-th clone from now (1-based) panic.
    pub fn fail_on_clone(k: usize) {
        LEDGER.with(|l| {
            l.clones.set(0);
            l.clone_fuse.set(Some(k));
        });
    }

    /// Make the `k`-th default construction from now (1-based) panic.
    pub fn fail_on_default(k: usize) {
        LEDGER.with(|l| {
            l.defaults.set(0);
            l.default_fuse.set(Some(k));
        });
    }

    /// Disarm both fuses without touching the counters.
    pub fn disarm() {
        LEDGER.with(|l| {
            l.clone_fuse.set(None);
            l.default_fuse.set(None);
        });
    }
}

/// An instrumented element carrying an `i64` payload.
///
/// Every live `Probe` is counted in the thread's ledger. `Clone` and
/// `Default` panic with `"injected clone failure"` /
/// `"injected default failure"` when their fuse is reached; a fuse fires
/// once and then disarms itself.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Probe {
    value: i64,
}

impl Probe {
    /// Construct a probe holding `value`.
    pub fn new(value: i64) -> Self {
        LEDGER.with(|l| l.live.set(l.live.get() + 1));
        Self { value }
    }

    /// The payload.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Overwrite the payload in place.
    pub fn set(&mut self, value: i64) {
        self.value = value;
    }
}

impl Clone for Probe {
    fn clone(&self) -> Self {
        let fire = LEDGER.with(|l| {
            let n = l.clones.get() + 1;
            l.clones.set(n);
            let fire = l.clone_fuse.get() == Some(n);
            if fire {
                l.clone_fuse.set(None);
            }
            fire
        });
        if fire {
            panic!("injected clone failure");
        }
        Self::new(self.value)
    }
}

impl Default for Probe {
    fn default() -> Self {
        let fire = LEDGER.with(|l| {
            let n = l.defaults.get() + 1;
            l.defaults.set(n);
            let fire = l.default_fuse.get() == Some(n);
            if fire {
                l.default_fuse.set(None);
            }
            fire
        });
        if fire {
            panic!("injected default failure");
        }
        Self::new(0)
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        LEDGER.with(|l| l.live.set(l.live.get() - 1));
    }
}

impl fmt::Debug for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Probe({})", self.value)
    }
}

impl PartialEq<i64> for Probe {
    fn eq(&self, other: &i64) -> bool {
        self.value == *other
    }
}

/// Payloads of a run of probes, for compact assertions.
pub fn values(probes: &[Probe]) -> Vec<i64> {
    probes.iter().map(Probe::value).collect()
}

/// Build probes with the given payloads.
pub fn probes(values: impl IntoIterator<Item = i64>) -> Vec<Probe> {
    values.into_iter().map(Probe::new).collect()
}
