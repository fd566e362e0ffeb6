//! Host run loop.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::interval;
use tracing::{debug, info, warn};

use super::builder::RootComponent;
use super::container::ServiceProvider;
use super::session::Session;
use crate::domain::entities::SessionId;

const NOTIFICATION_TICK_RATE: Duration = Duration::from_secs(1);

/// Requests the host loop handles.
#[derive(Debug)]
pub enum HostEvent {
    /// Open a session and send it back.
    OpenSession {
        /// Receives the new session.
        reply: oneshot::Sender<Session>,
    },
    /// End a session.
    CloseSession(SessionId),
    /// Stop the loop.
    Shutdown,
}

/// Sends events to a running host.
#[derive(Debug, Clone)]
pub struct HostHandle {
    tx: mpsc::UnboundedSender<HostEvent>,
}

impl HostHandle {
    /// Asks the host for a new session.
    ///
    /// Returns `None` once the host has stopped.
    pub async fn open_session(&self) -> Option<Session> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(HostEvent::OpenSession { reply }).ok()?;
        rx.await.ok()
    }

    /// Ends the session `id`. Returns `false` once the host has stopped.
    pub fn close_session(&self, id: SessionId) -> bool {
        self.tx.send(HostEvent::CloseSession(id)).is_ok()
    }

    /// Stops the host. Returns `false` once the host has stopped.
    pub fn shutdown(&self) -> bool {
        self.tx.send(HostEvent::Shutdown).is_ok()
    }
}

/// A built host with its root components mounted.
pub struct Host {
    provider: ServiceProvider,
    root_components: Vec<RootComponent>,
    sessions: HashMap<SessionId, Session>,
    event_tx: mpsc::UnboundedSender<HostEvent>,
    event_rx: mpsc::UnboundedReceiver<HostEvent>,
}

impl Host {
    pub(crate) fn new(provider: ServiceProvider, root_components: Vec<RootComponent>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            provider,
            root_components,
            sessions: HashMap::new(),
            event_tx,
            event_rx,
        }
    }

    /// Returns the frozen service bindings.
    #[must_use]
    pub const fn provider(&self) -> &ServiceProvider {
        &self.provider
    }

    /// Returns the mounted root components.
    #[must_use]
    pub fn root_components(&self) -> &[RootComponent] {
        &self.root_components
    }

    /// Returns a handle for sending events to this host.
    #[must_use]
    pub fn handle(&self) -> HostHandle {
        HostHandle {
            tx: self.event_tx.clone(),
        }
    }

    /// Returns the number of open sessions.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Opens a session and restores its stored sign-in, if any.
    pub async fn open_session(&mut self) -> Session {
        let session = self.provider.create_session();

        match session.auth().restore_session().await {
            Ok(true) => {
                debug!(session = %session.id(), "Restored stored sign-in");
                session.notifications().info("Sign-in", "Signed in with your saved session");
            }
            Ok(false) => {}
            Err(e) => {
                warn!(session = %session.id(), error = %e, "Failed to restore sign-in");
                session
                    .notifications()
                    .warn("Sign-in", format!("Could not restore your session: {e}"));
            }
        }

        self.sessions.insert(session.id(), session.clone());
        info!(session = %session.id(), active = self.sessions.len(), "Session opened");
        session
    }

    /// Ends session `id`. Returns whether it was open.
    pub fn close_session(&mut self, id: SessionId) -> bool {
        match self.sessions.remove(&id) {
            Some(session) => {
                session.end();
                true
            }
            None => {
                warn!(session = %id, "Close requested for unknown session");
                false
            }
        }
    }

    /// Runs the host until shutdown or Ctrl-C.
    ///
    /// # Errors
    /// Returns error if the Ctrl-C handler cannot be installed.
    pub async fn run(mut self) -> color_eyre::Result<()> {
        for component in &self.root_components {
            info!(component = %component.name, selector = %component.selector, "Root component mounted");
        }

        self.open_session().await;
        self.run_event_loop().await?;

        for (_, session) in self.sessions.drain() {
            session.end();
        }
        info!(cache = %self.provider.host().cache.stats(), "Host exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self) -> color_eyre::Result<()> {
        let mut notification_interval = interval(NOTIFICATION_TICK_RATE);
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                biased;

                result = &mut ctrl_c => {
                    result?;
                    info!("Interrupt received, shutting down");
                    break;
                }

                Some(event) = self.event_rx.recv() => {
                    if !self.handle_event(event).await {
                        break;
                    }
                }

                _ = notification_interval.tick() => {
                    for session in self.sessions.values() {
                        session.notifications().tick();
                    }
                }
            }
        }

        Ok(())
    }

    async fn handle_event(&mut self, event: HostEvent) -> bool {
        match event {
            HostEvent::OpenSession { reply } => {
                let session = self.open_session().await;
                if reply.send(session).is_err() {
                    debug!("Session requester went away");
                }
                true
            }
            HostEvent::CloseSession(id) => {
                self.close_session(id);
                true
            }
            HostEvent::Shutdown => {
                info!("Shutdown requested");
                false
            }
        }
    }
}
