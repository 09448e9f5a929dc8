use std::cell::Cell;
use std::rc::Rc;

/// Clonable stop flag for the frame loop. Clones share one flag; once
/// cancelled it stays cancelled. Single-threaded, like everything else here.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the loop from re-scheduling itself.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
