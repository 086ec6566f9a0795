//! Background worker for watermark scans
//!
//! The scan is the only operation allowed off the interaction thread: it is
//! read-only over an owned snapshot and terminates in exactly one delivery.
//! Requests carry a monotonically increasing ticket; consumers keep the
//! delivery with the highest ticket they have seen and drop the rest, which
//! gives "latest result wins" without any cancellation machinery.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

use crate::scan::{ScanReport, Scanner};

/// Worker message types
#[derive(Debug)]
pub enum WorkerMessage {
    /// Scan a text snapshot under the given ticket
    Scan { ticket: u64, text: String },
    /// Shutdown the workers
    Shutdown,
}

/// Terminal delivery of one scan request
#[derive(Debug, Clone)]
pub struct ScanDelivery {
    pub ticket: u64,
    pub report: ScanReport,
}

impl ScanDelivery {
    /// Whether this delivery replaces the last one the consumer kept
    pub fn supersedes(&self, last_seen: Option<u64>) -> bool {
        last_seen.map_or(true, |ticket| self.ticket > ticket)
    }
}

/// Pool of scan workers behind a request channel
pub struct ScanWorker {
    sender: mpsc::Sender<WorkerMessage>,
    results: mpsc::Receiver<ScanDelivery>,
    worker_count: usize,
    next_ticket: u64,
}

impl ScanWorker {
    /// Spawn workers sized to the machine, capped small
    pub fn spawn(scanner: Scanner) -> Self {
        Self::with_workers(scanner, num_cpus::get().min(4))
    }

    /// Spawn an explicit number of workers
    pub fn with_workers(scanner: Scanner, worker_count: usize) -> Self {
        let worker_count = worker_count.max(1);
        let (sender, receiver) = mpsc::channel::<WorkerMessage>(100);
        let (result_tx, results) = mpsc::channel::<ScanDelivery>(100);

        let receiver = Arc::new(Mutex::new(receiver));

        for _ in 0..worker_count {
            let scanner = scanner.clone();
            let receiver = receiver.clone();
            let result_tx = result_tx.clone();

            tokio::spawn(async move {
                loop {
                    let msg = {
                        let mut rx = receiver.lock().await;
                        rx.recv().await
                    };

                    match msg {
                        Some(WorkerMessage::Scan { ticket, text }) => {
                            let scanner = scanner.clone();
                            // Entropy and name resolution over large text is
                            // the slow path; keep it off the async threads
                            let scanned =
                                tokio::task::spawn_blocking(move || scanner.scan(&text)).await;

                            match scanned {
                                Ok(report) => {
                                    debug!(ticket, "scan delivered");
                                    if result_tx
                                        .send(ScanDelivery { ticket, report })
                                        .await
                                        .is_err()
                                    {
                                        break;
                                    }
                                }
                                Err(e) => {
                                    // Delivery contract is one result or
                                    // none; a panicked scan delivers none
                                    warn!(ticket, error = %e, "scan task failed");
                                }
                            }
                        }
                        Some(WorkerMessage::Shutdown) | None => break,
                    }
                }
            });
        }

        Self {
            sender,
            results,
            worker_count,
            next_ticket: 0,
        }
    }

    /// Submit a text snapshot for scanning, returning its ticket
    pub async fn submit(&mut self, text: String) -> Result<u64, String> {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.sender
            .send(WorkerMessage::Scan { ticket, text })
            .await
            .map_err(|e| format!("Failed to submit scan: {}", e))?;
        Ok(ticket)
    }

    /// Receive the next delivery; `None` after shutdown
    pub async fn recv(&mut self) -> Option<ScanDelivery> {
        self.results.recv().await
    }

    /// Ask the workers to exit after their current scans
    ///
    /// Each worker stops after consuming one shutdown message, so one is
    /// sent per worker. Once the last worker exits the results channel
    /// closes and `recv` returns `None`.
    pub async fn shutdown(&self) {
        for _ in 0..self.worker_count {
            let _ = self.sender.send(WorkerMessage::Shutdown).await;
        }
    }
}
