//! Player action use cases.

use std::sync::Arc;

mod apply;
mod process;

pub use apply::ApplyChoice;
pub use process::{ActionError, ActionInput, ActionOutcome, ProcessAction};

pub struct PlayerActionUseCases {
    pub process: Arc<ProcessAction>,
}

impl PlayerActionUseCases {
    pub fn new(process: Arc<ProcessAction>) -> Self {
        Self { process }
    }
}
