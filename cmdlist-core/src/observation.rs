use std::time::SystemTime;

use serde::Serialize;

/// Observation variants emitted by a command list as it is used.
///
/// Indices are positions in the list at the time of the event: for
/// `Registered` the slot the entry landed in, for `Executed` the entry's
/// position among the commands run by the current execute call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Observation {
    Registered {
        ts: SystemTime,
        index: usize,
        pending: usize,
    },
    Grown {
        ts: SystemTime,
        from: usize,
        to: usize,
    },
    Executed {
        ts: SystemTime,
        index: usize,
    },
    Drained {
        ts: SystemTime,
        executed: usize,
        remaining: usize,
    },
    Cleared {
        ts: SystemTime,
        discarded: usize,
    },
}
