//! Shared application state.
//!
//! The single owner of the store and panel state, cloned cheaply into
//! axum handlers and background workers. All mutation goes through the
//! mutexes here — there are no ambient globals.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock, broadcast, mpsc};
use tokio_util::sync::CancellationToken;

use crate::config::HubConfig;
use crate::notification::queue::ToastCommand;
use crate::render::PanelState;
use crate::store::NotificationStore;

#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    /// Broadcast channel feeding every connected surface.
    ws_tx: broadcast::Sender<String>,
    /// Immutable for the process lifetime.
    config: HubConfig,
    store: Mutex<NotificationStore>,
    panel: Mutex<PanelState>,
    /// Slot for the toast worker's command sender; `None` once closed.
    toast_tx: RwLock<Option<mpsc::Sender<ToastCommand>>>,
    shutdown: CancellationToken,
}

impl SharedState {
    pub fn new(config: HubConfig) -> Self {
        let (ws_tx, _) = broadcast::channel(256);
        let panel = PanelState::from_config(&config);

        Self {
            inner: Arc::new(SharedStateInner {
                ws_tx,
                config,
                store: Mutex::new(NotificationStore::new()),
                panel: Mutex::new(panel),
                toast_tx: RwLock::new(None),
                shutdown: CancellationToken::new(),
            }),
        }
    }

    pub fn config(&self) -> &HubConfig {
        &self.inner.config
    }

    pub fn control_port(&self) -> u16 {
        self.inner.config.control_port
    }

    pub fn ws_sender(&self) -> &broadcast::Sender<String> {
        &self.inner.ws_tx
    }

    pub fn subscribe_ws(&self) -> broadcast::Receiver<String> {
        self.inner.ws_tx.subscribe()
    }

    pub fn store(&self) -> &Mutex<NotificationStore> {
        &self.inner.store
    }

    pub fn panel(&self) -> &Mutex<PanelState> {
        &self.inner.panel
    }

    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.inner.shutdown
    }

    pub async fn set_toast_sender(&self, tx: mpsc::Sender<ToastCommand>) {
        let mut slot = self.inner.toast_tx.write().await;
        *slot = Some(tx);
    }

    pub async fn toast_sender(&self) -> Option<mpsc::Sender<ToastCommand>> {
        self.inner.toast_tx.read().await.clone()
    }

    pub async fn take_toast_sender(&self) -> Option<mpsc::Sender<ToastCommand>> {
        self.inner.toast_tx.write().await.take()
    }
}
