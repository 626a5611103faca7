//! Auto-advancing playback on a tokio runtime.

use std::sync::Arc;

use tokio::sync::{watch, Notify, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::trace;

use crate::session::{Session, SessionStatus};
use crate::transport::Tick;

/// Drives a [`Session`] in real time.
///
/// A single background task keeps at most one pending wake-up. Every
/// mutation made through [`Player::update`] wakes the task. A transport
/// transition issues a new tick, so the pending deadline is dropped and a
/// fresh one scheduled; any other mutation leaves the deadline in place.
/// Status snapshots are published on a watch channel after every change.
pub struct Player {
    session: Arc<RwLock<Session>>,
    notify: Arc<Notify>,
    status: Arc<watch::Sender<SessionStatus>>,
    driver: JoinHandle<()>,
}

impl Player {
    /// Take ownership of `session` and start the driver task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(session: Session) -> Self {
        let (status, _) = watch::channel(session.status());
        let status = Arc::new(status);
        let session = Arc::new(RwLock::new(session));
        let notify = Arc::new(Notify::new());

        let driver = tokio::spawn(drive(session.clone(), notify.clone(), status.clone()));

        Self {
            session,
            notify,
            status,
            driver,
        }
    }

    /// Mutate the session, publish its new status and reschedule.
    pub async fn update<T>(&self, f: impl FnOnce(&mut Session) -> T) -> T {
        let out = {
            let mut session = self.session.write().await;
            let out = f(&mut *session);
            self.status.send_replace(session.status());
            out
        };
        self.notify.notify_one();
        out
    }

    /// Read from the session.
    pub async fn read<T>(&self, f: impl FnOnce(&Session) -> T) -> T {
        let session = self.session.read().await;
        f(&*session)
    }

    /// Latest published status.
    pub fn status(&self) -> SessionStatus {
        self.status.borrow().clone()
    }

    /// Receive every status change from now on.
    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.status.subscribe()
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

async fn drive(
    session: Arc<RwLock<Session>>,
    notify: Arc<Notify>,
    status: Arc<watch::Sender<SessionStatus>>,
) {
    let mut pending: Option<(Tick, Instant)> = None;

    loop {
        let wakeup = session.read().await.next_wakeup();

        // Keep the deadline while the same tick is due
        pending = match (wakeup, pending) {
            (None, _) => None,
            (Some((_, tick)), Some((due, deadline))) if due == tick => Some((tick, deadline)),
            (Some((delay, tick)), _) => Some((tick, Instant::now() + delay)),
        };

        let Some((tick, deadline)) = pending else {
            notify.notified().await;
            continue;
        };

        tokio::select! {
            _ = tokio::time::sleep_until(deadline) => {
                pending = None;
                let mut session = session.write().await;
                if session.on_tick(tick) {
                    trace!(cursor = session.cursor().to_signed(), "tick");
                    status.send_replace(session.status());
                }
            }
            _ = notify.notified() => {}
        }
    }
}
