use std::sync::{Arc, RwLock};

use crate::record::ConfigRecord;

/// Process-wide handle to the active [`ConfigRecord`].
///
/// Readers take an `Arc` snapshot and keep reading it without further
/// synchronization; [`ConfigHandle::swap`] installs a freshly validated
/// record without touching the one in flight, so every reader observes a
/// fully consistent old or new record, never a mix.
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    inner: Arc<RwLock<Arc<ConfigRecord>>>,
}

impl ConfigHandle {
    pub fn new(record: ConfigRecord) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(record))),
        }
    }

    /// Snapshot of the active record.
    pub fn get(&self) -> Arc<ConfigRecord> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replaces the active record, returning the previous one.
    pub fn swap(&self, record: ConfigRecord) -> Arc<ConfigRecord> {
        let mut slot = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        std::mem::replace(&mut *slot, Arc::new(record))
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use std::thread;

    use super::*;
    use crate::record::{Mode, RawConfig};

    fn record(region: &str) -> ConfigRecord {
        RawConfig {
            region: Some(region.to_owned()),
            user_pool_id: Some(format!("{}_AbCdEfGhi", region)),
            user_pool_web_client_id: Some("4example0client1id2345678".to_owned()),
            domain: Some(format!("https://dashboard.auth.{}.amazoncognito.com", region)),
            redirect_sign_in: Some("https://dashboard.example.com/".to_owned()),
            redirect_sign_out: Some("https://dashboard.example.com/".to_owned()),
            api_base_url: Some(format!(
                "https://abc123.execute-api.{}.amazonaws.com",
                region
            )),
            scopes: Some(vec!["openid".to_owned()]),
        }
        .validate(Mode::Production)
        .unwrap()
    }

    #[test]
    fn swap_returns_the_previous_record() {
        let handle = ConfigHandle::new(record("eu-central-1"));
        let old = handle.swap(record("eu-west-1"));

        assert_eq!(old.region, "eu-central-1");
        assert_eq!(handle.get().region, "eu-west-1");
    }

    #[test]
    fn readers_keep_a_consistent_snapshot_across_a_swap() {
        let handle = ConfigHandle::new(record("eu-central-1"));
        let snapshot = handle.get();

        let handle_ = handle.clone();
        thread::spawn(move || {
            handle_.swap(record("eu-west-1"));
        })
        .join()
        .unwrap();

        // The pre-swap snapshot is still whole.
        assert_eq!(snapshot.region, "eu-central-1");
        assert!(snapshot.domain.contains("eu-central-1"));
        assert_eq!(handle.get().region, "eu-west-1");
    }
}
