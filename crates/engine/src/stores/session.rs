//! In-memory game session storage.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use rpgmaestro_domain::{AgentState, PlayerState, SessionId};

use crate::infrastructure::ports::ClockPort;

/// One player's progress plus the companion's state.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub player: PlayerState,
    pub agent: AgentState,
    last_active: DateTime<Utc>,
}

impl GameSession {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            player: PlayerState::new(),
            agent: AgentState::new(),
            last_active: now,
        }
    }

    pub fn last_active(&self) -> DateTime<Utc> {
        self.last_active
    }

    /// Replace both states at once.
    pub fn commit(&mut self, player: PlayerState, agent: AgentState, now: DateTime<Utc>) {
        self.player = player;
        self.agent = agent;
        self.last_active = now;
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_active = now;
    }
}

pub type SharedSession = Arc<Mutex<GameSession>>;

/// Session map. Each session sits behind its own mutex so choices for one
/// session are serialized while different sessions proceed in parallel.
pub struct SessionStore {
    sessions: DashMap<SessionId, SharedSession>,
    clock: Arc<dyn ClockPort>,
}

impl SessionStore {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            sessions: DashMap::new(),
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn create(&self) -> (SessionId, SharedSession) {
        let id = SessionId::new();
        let session = Arc::new(Mutex::new(GameSession::new(self.clock.now())));
        self.sessions.insert(id, session.clone());
        (id, session)
    }

    pub fn get(&self, id: SessionId) -> Option<SharedSession> {
        self.sessions.get(&id).map(|entry| entry.value().clone())
    }

    /// Lock a session for an update. Returns `None` when the session is
    /// unknown, or when it was removed or swept while waiting for the lock.
    pub async fn lock(&self, id: SessionId) -> Option<OwnedMutexGuard<GameSession>> {
        let session = self.get(id)?;
        let guard = session.clone().lock_owned().await;
        let live = self
            .sessions
            .get(&id)
            .is_some_and(|entry| Arc::ptr_eq(entry.value(), &session));
        live.then_some(guard)
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    pub fn remove(&self, id: SessionId) -> bool {
        self.sessions.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop sessions idle for longer than `max_idle`. Sessions currently
    /// locked are in use and always kept. Returns how many were dropped.
    pub fn sweep_idle(&self, max_idle: Duration) -> usize {
        let Ok(max_idle) = chrono::Duration::from_std(max_idle) else {
            return 0;
        };
        let now = self.clock.now();
        let before = self.sessions.len();

        self.sessions.retain(|_, session| match session.try_lock() {
            Ok(guard) => now.signed_duration_since(guard.last_active) <= max_idle,
            Err(_) => true,
        });

        before.saturating_sub(self.sessions.len())
    }
}
