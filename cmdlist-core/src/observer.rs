use crate::Observation;
use std::sync::Arc;

/// Observer function type
pub type ObserverFn = Arc<dyn Fn(&Observation) + Send + Sync>;

/// No-op observer
pub fn no_op_observer() -> ObserverFn {
    Arc::new(|_observation: &Observation| {})
}

/// Tracing observer - logs to tracing crate
pub fn tracing_observer() -> ObserverFn {
    Arc::new(move |observation: &Observation| match observation {
        Observation::Registered { index, pending, .. } => {
            tracing::trace!(target: "cmdlist::Registered", index, pending, "command registered");
        }
        Observation::Grown { from, to, .. } => {
            tracing::debug!(target: "cmdlist::Grown", from, to, "command storage grown");
        }
        Observation::Executed { index, .. } => {
            tracing::trace!(target: "cmdlist::Executed", index, "command executed");
        }
        Observation::Drained {
            executed, remaining, ..
        } => {
            tracing::debug!(target: "cmdlist::Drained", executed, remaining, "command list drained");
        }
        Observation::Cleared { discarded, .. } => {
            tracing::debug!(target: "cmdlist::Cleared", discarded, "command list cleared");
        }
    })
}

/// Filter observer - include/exclude per-command and list-level events.
///
/// Per-command events are `Registered` and `Executed`; everything else is
/// list-level.
pub fn filter_observer(
    wrapped: ObserverFn,
    include_commands: bool,
    include_list_events: bool,
) -> ObserverFn {
    Arc::new(move |observation: &Observation| {
        let should_pass = match observation {
            Observation::Registered { .. } | Observation::Executed { .. } => include_commands,
            Observation::Grown { .. }
            | Observation::Drained { .. }
            | Observation::Cleared { .. } => include_list_events,
        };

        if should_pass {
            wrapped(observation);
        }
    })
}

/// Filter observer with custom predicate
pub fn filter_with<F>(wrapped: ObserverFn, predicate: F) -> ObserverFn
where
    F: Fn(&Observation) -> bool + Send + Sync + 'static,
{
    Arc::new(move |observation: &Observation| {
        if predicate(observation) {
            wrapped(observation);
        }
    })
}

/// Tee observer - call multiple observers
pub fn tee_observer(observers: Vec<ObserverFn>) -> ObserverFn {
    Arc::new(move |observation: &Observation| {
        for observer in &observers {
            observer(observation);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::SystemTime;

    fn recording() -> (ObserverFn, Arc<Mutex<Vec<Observation>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&seen);
        let observer: ObserverFn =
            Arc::new(move |o: &Observation| captured.lock().unwrap().push(o.clone()));
        (observer, seen)
    }

    fn registered() -> Observation {
        Observation::Registered {
            ts: SystemTime::now(),
            index: 0,
            pending: 1,
        }
    }

    fn cleared() -> Observation {
        Observation::Cleared {
            ts: SystemTime::now(),
            discarded: 1,
        }
    }

    #[test]
    fn filter_drops_excluded_kinds() {
        let (inner, seen) = recording();
        let observer = filter_observer(inner, false, true);
        observer(&registered());
        observer(&cleared());
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(matches!(seen[0], Observation::Cleared { discarded: 1, .. }));
    }

    #[test]
    fn filter_with_applies_predicate() {
        let (inner, seen) = recording();
        let observer = filter_with(inner, |o| matches!(o, Observation::Registered { .. }));
        observer(&cleared());
        observer(&registered());
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn tee_forwards_to_every_observer() {
        let (first, first_seen) = recording();
        let (second, second_seen) = recording();
        let observer = tee_observer(vec![first, no_op_observer(), second]);
        observer(&registered());
        assert_eq!(first_seen.lock().unwrap().len(), 1);
        assert_eq!(second_seen.lock().unwrap().len(), 1);
    }
}
