//! Session lifecycle: start, inspect, end and expire.

use std::sync::Arc;
use std::time::Duration;

use rpgmaestro_domain::{AgentState, PlayerState, SessionId};

use crate::stores::SessionStore;

/// Point-in-time copy of a session's state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub player: PlayerState,
    pub agent: AgentState,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),
}

pub struct StartSession {
    sessions: Arc<SessionStore>,
}

impl StartSession {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self) -> SessionSnapshot {
        let (session_id, session) = self.sessions.create();
        let guard = session.lock().await;
        tracing::info!(session_id = %session_id, "Session started");
        SessionSnapshot {
            session_id,
            player: guard.player.clone(),
            agent: guard.agent.clone(),
        }
    }
}

pub struct GetSession {
    sessions: Arc<SessionStore>,
}

impl GetSession {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    /// Reading a session counts as activity and postpones its expiry.
    pub async fn execute(&self, session_id: SessionId) -> Result<SessionSnapshot, SessionError> {
        let session = self
            .sessions
            .get(session_id)
            .ok_or(SessionError::NotFound(session_id))?;
        let mut guard = session.lock().await;
        guard.touch(self.sessions.now());
        Ok(SessionSnapshot {
            session_id,
            player: guard.player.clone(),
            agent: guard.agent.clone(),
        })
    }
}

pub struct EndSession {
    sessions: Arc<SessionStore>,
}

impl EndSession {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub fn execute(&self, session_id: SessionId) -> Result<(), SessionError> {
        if self.sessions.remove(session_id) {
            tracing::info!(session_id = %session_id, "Session ended");
            Ok(())
        } else {
            Err(SessionError::NotFound(session_id))
        }
    }
}

/// Drops sessions nobody has touched for `max_idle`.
pub struct ExpireIdleSessions {
    sessions: Arc<SessionStore>,
    max_idle: Duration,
}

impl ExpireIdleSessions {
    pub fn new(sessions: Arc<SessionStore>, max_idle: Duration) -> Self {
        Self { sessions, max_idle }
    }

    pub fn max_idle(&self) -> Duration {
        self.max_idle
    }

    pub fn execute(&self) -> usize {
        let expired = self.sessions.sweep_idle(self.max_idle);
        if expired > 0 {
            tracing::info!(
                expired,
                remaining = self.sessions.len(),
                "Expired idle sessions"
            );
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{ClockPort, MockClockPort};
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::Mutex as StdMutex;

    fn store_with_clock() -> (Arc<StdMutex<DateTime<Utc>>>, Arc<SessionStore>) {
        let now = Arc::new(StdMutex::new(
            Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap(),
        ));
        let now_in_clock = now.clone();
        let mut clock = MockClockPort::new();
        clock
            .expect_now()
            .returning(move || *now_in_clock.lock().unwrap());
        let clock: Arc<dyn ClockPort> = Arc::new(clock);
        (now, Arc::new(SessionStore::new(clock)))
    }

    #[tokio::test]
    async fn started_session_has_initial_state() {
        let (_, sessions) = store_with_clock();

        let snapshot = StartSession::new(sessions.clone()).execute().await;

        assert_eq!(snapshot.player, PlayerState::new());
        assert_eq!(snapshot.agent, AgentState::new());
        assert!(sessions.get(snapshot.session_id).is_some());
    }

    #[tokio::test]
    async fn when_session_unknown_then_get_and_end_fail() {
        let (_, sessions) = store_with_clock();
        let unknown = SessionId::new();

        let get = GetSession::new(sessions.clone()).execute(unknown).await;
        let end = EndSession::new(sessions).execute(unknown);

        assert!(matches!(get, Err(SessionError::NotFound(id)) if id == unknown));
        assert!(matches!(end, Err(SessionError::NotFound(_))));
    }

    #[tokio::test]
    async fn ended_session_is_gone() {
        let (_, sessions) = store_with_clock();
        let snapshot = StartSession::new(sessions.clone()).execute().await;

        EndSession::new(sessions.clone())
            .execute(snapshot.session_id)
            .unwrap();

        assert!(sessions.is_empty());
    }

    #[tokio::test]
    async fn reading_a_session_keeps_it_alive() {
        let (now, sessions) = store_with_clock();
        let kept = StartSession::new(sessions.clone()).execute().await;
        let dropped = StartSession::new(sessions.clone()).execute().await;
        let expire = ExpireIdleSessions::new(sessions.clone(), Duration::from_secs(600));

        *now.lock().unwrap() += chrono::Duration::minutes(8);
        GetSession::new(sessions.clone())
            .execute(kept.session_id)
            .await
            .unwrap();
        *now.lock().unwrap() += chrono::Duration::minutes(5);

        assert_eq!(expire.execute(), 1);
        assert!(sessions.get(kept.session_id).is_some());
        assert!(sessions.get(dropped.session_id).is_none());
    }
}
