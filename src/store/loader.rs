use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::{FetchError, RecordSource};
use crate::records::Record;

pub type FetchResult = Result<Vec<Record>, FetchError>;

/// Handle to a fetch running on a background thread.
///
/// Dropping the handle abandons the fetch: the worker still finishes its
/// request, but the result is discarded instead of being applied.
pub struct PendingFetch {
    result_rx: Receiver<FetchResult>,
    origin: String,
    started: Instant,
}

/// Start fetching from `source` on a background thread.
pub fn spawn(source: Arc<dyn RecordSource>) -> PendingFetch {
    let (result_tx, result_rx) = mpsc::channel();
    let origin = source.describe();
    info!(source = %origin, "fetching advocates");

    thread::spawn(move || {
        let result = source.fetch();
        if result_tx.send(result).is_err() {
            debug!("fetch result discarded; receiver dropped");
        }
    });

    PendingFetch {
        result_rx,
        origin,
        started: Instant::now(),
    }
}

impl PendingFetch {
    /// Return the result if the worker has finished, without blocking.
    pub fn poll(&self) -> Option<FetchResult> {
        match self.result_rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(FetchError::WorkerGone)),
        }
    }

    /// Block until the worker delivers a result or `timeout` elapses.
    pub fn wait(&self, timeout: Duration) -> Option<FetchResult> {
        match self.result_rx.recv_timeout(timeout) {
            Ok(result) => Some(result),
            Err(mpsc::RecvTimeoutError::Timeout) => None,
            Err(mpsc::RecvTimeoutError::Disconnected) => Some(Err(FetchError::WorkerGone)),
        }
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::store::SeedSource;

    struct GatedSource {
        gate: Mutex<Option<Receiver<()>>>,
        calls: AtomicUsize,
    }

    impl RecordSource for GatedSource {
        fn fetch(&self) -> FetchResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let gate = self.gate.lock().unwrap().take();
            if let Some(gate) = gate {
                let _ = gate.recv();
            }
            Ok(vec![Record::new("Late", "Arrival", "Nowhere", "MD")])
        }

        fn describe(&self) -> String {
            "gated".into()
        }
    }

    struct PanickingSource;

    impl RecordSource for PanickingSource {
        fn fetch(&self) -> FetchResult {
            panic!("source blew up");
        }

        fn describe(&self) -> String {
            "panicking".into()
        }
    }

    #[test]
    fn delivers_result_from_worker() {
        let pending = spawn(Arc::new(SeedSource));
        let result = pending.wait(Duration::from_secs(5)).expect("result in time");
        assert!(!result.expect("seed fetch").is_empty());
        assert_eq!(pending.origin(), "built-in seed data");
    }

    #[test]
    fn poll_is_empty_while_fetch_is_pending() {
        let (gate_tx, gate_rx) = mpsc::channel();
        let source = Arc::new(GatedSource {
            gate: Mutex::new(Some(gate_rx)),
            calls: AtomicUsize::new(0),
        });
        let pending = spawn(source.clone());
        assert!(pending.poll().is_none());

        gate_tx.send(()).unwrap();
        let result = pending.wait(Duration::from_secs(5)).expect("result in time");
        assert_eq!(result.expect("fetch")[0].first_name, "Late");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropping_handle_discards_late_result() {
        let (gate_tx, gate_rx) = mpsc::channel();
        let source = Arc::new(GatedSource {
            gate: Mutex::new(Some(gate_rx)),
            calls: AtomicUsize::new(0),
        });
        let pending = spawn(source);
        drop(pending);
        // The worker must not panic when nobody is listening any more.
        let _ = gate_tx.send(());
    }

    #[test]
    fn worker_panic_surfaces_as_error() {
        let pending = spawn(Arc::new(PanickingSource));
        let result = pending.wait(Duration::from_secs(5)).expect("result in time");
        assert!(matches!(result, Err(FetchError::WorkerGone)));
    }
}
