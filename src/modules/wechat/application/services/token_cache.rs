use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::wechat::application::ports::outgoing::clock::Clock;
use crate::wechat::application::ports::outgoing::wechat_api::{WechatApi, WechatApiError};

/// Tokens are refreshed this many seconds before the platform-reported
/// expiry, and never cached for less than this long.
const EXPIRY_MARGIN_SECS: i64 = 300;

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// Caches the WeChat access token across requests. Readers take the fast
/// path; on expiry exactly one caller refreshes while the rest wait on the
/// write lock and re-check.
pub struct WechatTokenCache {
    api: Arc<dyn WechatApi>,
    clock: Arc<dyn Clock>,
    app_id: String,
    secret: String,
    cached: RwLock<Option<CachedToken>>,
}

impl WechatTokenCache {
    pub fn new(
        api: Arc<dyn WechatApi>,
        clock: Arc<dyn Clock>,
        app_id: String,
        secret: String,
    ) -> Self {
        Self {
            api,
            clock,
            app_id,
            secret,
            cached: RwLock::new(None),
        }
    }

    pub async fn access_token(&self) -> Result<String, WechatApiError> {
        let now = self.clock.now();

        if let Some(cached) = self.cached.read().await.as_ref() {
            if cached.expires_at > now {
                debug!("using cached WeChat access token");
                return Ok(cached.token.clone());
            }
        }

        let mut guard = self.cached.write().await;

        // Another caller may have refreshed while we waited for the lock.
        let now = self.clock.now();
        if let Some(cached) = guard.as_ref() {
            if cached.expires_at > now {
                return Ok(cached.token.clone());
            }
        }

        let fetched = self
            .api
            .fetch_access_token(&self.app_id, &self.secret)
            .await?;

        let ttl = (fetched.expires_in as i64 - EXPIRY_MARGIN_SECS).max(EXPIRY_MARGIN_SECS);
        info!(ttl_secs = ttl, "fetched new WeChat access token");

        *guard = Some(CachedToken {
            token: fetched.token.clone(),
            expires_at: now + Duration::seconds(ttl),
        });

        Ok(fetched.token)
    }
}
