//! Session use cases.

use std::sync::Arc;

mod lifecycle;

pub use lifecycle::{
    EndSession, ExpireIdleSessions, GetSession, SessionError, SessionSnapshot, StartSession,
};

/// Container for session use cases.
pub struct SessionUseCases {
    pub start: Arc<StartSession>,
    pub get: Arc<GetSession>,
    pub end: Arc<EndSession>,
}

impl SessionUseCases {
    pub fn new(start: Arc<StartSession>, get: Arc<GetSession>, end: Arc<EndSession>) -> Self {
        Self { start, get, end }
    }
}
