use std::time::Instant;

use crate::error::Operation;

/// Logs the start of a service operation, and its duration once dropped (on every return path)
pub struct OperationTimer {
    op: Operation,
    started: Instant,
}

impl OperationTimer {
    pub fn start(op: Operation) -> Self {
        log::info!("Started [{}]", op);

        Self {
            op,
            started: Instant::now(),
        }
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        log::info!(
            "Finished [{}] [Duration: {}ms]",
            self.op,
            self.started.elapsed().as_millis()
        );
    }
}
