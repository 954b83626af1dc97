// View state store: server and container snapshots guarded by per-slice load tokens

use crate::models::{Container, Server};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

/// Issued by `begin_*_load`; identifies one in-flight load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadToken(u64);

#[derive(Clone)]
pub struct ViewStore {
    inner: Arc<Inner>,
}

struct Inner {
    servers: watch::Sender<Vec<Server>>,
    containers: watch::Sender<Vec<Container>>,
    server_token: AtomicU64,
    container_token: AtomicU64,
}

impl Default for ViewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStore {
    pub fn new() -> Self {
        let (servers, _) = watch::channel(Vec::new());
        let (containers, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(Inner {
                servers,
                containers,
                server_token: AtomicU64::new(0),
                container_token: AtomicU64::new(0),
            }),
        }
    }

    pub fn servers(&self) -> Vec<Server> {
        self.inner.servers.borrow().clone()
    }

    pub fn containers(&self) -> Vec<Container> {
        self.inner.containers.borrow().clone()
    }

    pub fn find_server(&self, id: &str) -> Option<Server> {
        self.inner.servers.borrow().iter().find(|s| s.id == id).cloned()
    }

    pub fn subscribe_servers(&self) -> watch::Receiver<Vec<Server>> {
        self.inner.servers.subscribe()
    }

    pub fn begin_server_load(&self) -> LoadToken {
        LoadToken(self.inner.server_token.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn begin_container_load(&self) -> LoadToken {
        LoadToken(self.inner.container_token.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Store `servers` if `token` is the latest server load. Returns whether it was applied.
    pub fn apply_servers(&self, token: LoadToken, servers: Vec<Server>) -> bool {
        apply_latest(&self.inner.servers, &self.inner.server_token, token, servers)
    }

    /// Reset the server snapshot to empty after a failed load (same staleness rule).
    pub fn reset_servers(&self, token: LoadToken) -> bool {
        self.apply_servers(token, Vec::new())
    }

    pub fn apply_containers(&self, token: LoadToken, containers: Vec<Container>) -> bool {
        apply_latest(
            &self.inner.containers,
            &self.inner.container_token,
            token,
            containers,
        )
    }

    pub fn reset_containers(&self, token: LoadToken) -> bool {
        self.apply_containers(token, Vec::new())
    }

    pub fn is_latest_server_load(&self, token: LoadToken) -> bool {
        self.inner.server_token.load(Ordering::SeqCst) == token.0
    }
}

fn apply_latest<T>(
    tx: &watch::Sender<Vec<T>>,
    counter: &AtomicU64,
    token: LoadToken,
    value: Vec<T>,
) -> bool {
    let mut value = Some(value);
    tx.send_if_modified(|current| {
        if counter.load(Ordering::SeqCst) != token.0 {
            return false;
        }
        if let Some(v) = value.take() {
            *current = v;
        }
        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NodeRole, NodeStatus};

    fn server(id: &str) -> Server {
        Server {
            id: id.into(),
            label: id.to_uppercase(),
            base_url: format!("tcp://{}:2375", id),
            role: NodeRole::Client,
            status: NodeStatus::Online,
            kind: None,
            tls: None,
            last_check: None,
            error: None,
        }
    }

    #[test]
    fn test_latest_load_is_applied() {
        let store = ViewStore::new();
        let t = store.begin_server_load();
        assert!(store.apply_servers(t, vec![server("a")]));
        assert_eq!(store.servers().len(), 1);
        assert_eq!(store.find_server("a").unwrap().label, "A");
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let store = ViewStore::new();
        let older = store.begin_server_load();
        let newer = store.begin_server_load();
        assert!(store.apply_servers(newer, vec![server("new")]));
        assert!(!store.apply_servers(older, vec![server("old")]));
        let ids: Vec<_> = store.servers().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["new"]);
    }

    #[test]
    fn test_stale_reset_does_not_clear_newer_snapshot() {
        let store = ViewStore::new();
        let older = store.begin_server_load();
        let newer = store.begin_server_load();
        store.apply_servers(newer, vec![server("x")]);
        assert!(!store.reset_servers(older));
        assert_eq!(store.servers().len(), 1);
    }

    #[test]
    fn test_reset_empties_snapshot() {
        let store = ViewStore::new();
        let t = store.begin_server_load();
        store.apply_servers(t, vec![server("a"), server("b")]);
        let t = store.begin_server_load();
        assert!(store.reset_servers(t));
        assert!(store.servers().is_empty());
    }

    #[test]
    fn test_slices_have_independent_tokens() {
        let store = ViewStore::new();
        let s = store.begin_server_load();
        let _c = store.begin_container_load();
        let _c2 = store.begin_container_load();
        assert!(store.is_latest_server_load(s));
        assert!(store.apply_servers(s, vec![server("a")]));
    }

    #[tokio::test]
    async fn test_subscribers_see_applied_snapshot() {
        let store = ViewStore::new();
        let mut rx = store.subscribe_servers();
        let t = store.begin_server_load();
        store.apply_servers(t, vec![server("a")]);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().len(), 1);
    }
}
