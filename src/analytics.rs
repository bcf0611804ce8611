use serde_json::{json, Value};
use std::{env, sync::Arc, time::Duration};
use tracing::{debug, warn};

const DEFAULT_HOST: &str = "https://us.i.posthog.com";
const DISTINCT_ID: &str = "smileback";
const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Fire-and-forget event delivery to an external collector. Cheap to clone;
/// a disabled instance drops every event without touching the network.
#[derive(Clone)]
pub struct Analytics {
    inner: Option<Arc<Inner>>,
}

struct Inner {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl Analytics {
    /// Reads `SMILEBACK_ANALYTICS_KEY` and `SMILEBACK_ANALYTICS_HOST`.
    /// Without a key, analytics stays off and everything else still works.
    pub fn from_env() -> Self {
        match env::var("SMILEBACK_ANALYTICS_KEY") {
            Ok(key) if !key.trim().is_empty() => {
                let host = env::var("SMILEBACK_ANALYTICS_HOST")
                    .unwrap_or_else(|_| DEFAULT_HOST.to_string());
                Self::new(key, &host)
            }
            _ => {
                warn!("analytics key not set; events will not be sent");
                Self::disabled()
            }
        }
    }

    pub fn new(api_key: String, host: &str) -> Self {
        Self {
            inner: Some(Arc::new(Inner {
                client: reqwest::Client::new(),
                endpoint: capture_url(host),
                api_key,
            })),
        }
    }

    pub fn disabled() -> Self {
        Self { inner: None }
    }

    pub fn enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Queues one event on a detached task. Delivery failure is logged and
    /// dropped; it never reaches the caller.
    pub fn capture(&self, event: &'static str, properties: Value) {
        let Some(inner) = self.inner.clone() else {
            return;
        };
        let payload = json!({
            "api_key": inner.api_key,
            "event": event,
            "distinct_id": DISTINCT_ID,
            "properties": properties,
        });
        tokio::spawn(async move {
            let result = inner
                .client
                .post(&inner.endpoint)
                .timeout(SEND_TIMEOUT)
                .json(&payload)
                .send()
                .await;
            match result {
                Ok(response) if !response.status().is_success() => {
                    debug!("collector rejected {event}: {}", response.status());
                }
                Ok(_) => {}
                Err(err) => debug!("failed to deliver {event}: {err}"),
            }
        });
    }
}

fn capture_url(host: &str) -> String {
    format!("{}/capture/", host.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_capture_is_a_no_op() {
        let analytics = Analytics::disabled();
        assert!(!analytics.enabled());
        // Must not panic even without a tokio runtime.
        analytics.capture("smile_back_reported", json!({"timestamp": 0}));
    }

    #[test]
    fn capture_url_normalizes_trailing_slash() {
        assert_eq!(
            capture_url("https://us.i.posthog.com/"),
            "https://us.i.posthog.com/capture/"
        );
        assert_eq!(
            capture_url("https://eu.i.posthog.com"),
            "https://eu.i.posthog.com/capture/"
        );
    }
}
