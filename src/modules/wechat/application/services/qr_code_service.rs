use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use tracing::debug;

use crate::recommendor::application::ports::outgoing::qr_generator::{
    QrCodeGenerator, QrCodePair, QrGenerateError,
};
use crate::wechat::application::ports::outgoing::wechat_api::{WechatApi, WechatApiError};
use crate::wechat::application::services::token_cache::WechatTokenCache;
use crate::wechat::config::WechatConfig;

const QR_SIZE: u32 = 256;

/// Produces both QR payloads for a recommendor: a locally rendered code for
/// the web detail page, and a Mini Program code fetched from the WeChat
/// platform when credentials are configured.
pub struct QrCodeService {
    config: WechatConfig,
    api: Arc<dyn WechatApi>,
    token_cache: Option<Arc<WechatTokenCache>>,
}

impl QrCodeService {
    pub fn new(
        config: WechatConfig,
        api: Arc<dyn WechatApi>,
        token_cache: Option<Arc<WechatTokenCache>>,
    ) -> Self {
        Self {
            config,
            api,
            token_cache,
        }
    }

    fn render_local(data: &str) -> Result<String, QrGenerateError> {
        let code = QrCode::with_error_correction_level(data, EcLevel::M)
            .map_err(|e| QrGenerateError::Encode(e.to_string()))?;
        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(QR_SIZE, QR_SIZE)
            .build();

        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| QrGenerateError::Encode(e.to_string()))?;

        Ok(format!("data:image/png;base64,{}", BASE64.encode(&png)))
    }

    async fn platform_wxa_code(
        &self,
        cache: &WechatTokenCache,
        path: &str,
    ) -> Result<String, QrGenerateError> {
        let (page, scene) = path.split_once('?').unwrap_or((path, ""));

        let token = cache.access_token().await.map_err(map_api_error)?;
        let bytes = self
            .api
            .fetch_wxa_code(&token, page, scene)
            .await
            .map_err(map_api_error)?;

        Ok(format!("data:image/png;base64,{}", BASE64.encode(&bytes)))
    }
}

fn map_api_error(e: WechatApiError) -> QrGenerateError {
    match e {
        WechatApiError::Transport(msg) => QrGenerateError::Transport(msg),
        other => QrGenerateError::Platform(other.to_string()),
    }
}

#[async_trait]
impl QrCodeGenerator for QrCodeService {
    async fn generate_for_recommendor(&self, id: i32) -> Result<QrCodePair, QrGenerateError> {
        let web_url = format!("{}/recommendors/{}", self.config.base_url, id);
        let web = Self::render_local(&web_url)?;

        let wx_path = format!("{}/pages/recommendor/detail?id={}", self.config.app_path, id);
        let wxapp = match &self.token_cache {
            Some(cache) => self.platform_wxa_code(cache, &wx_path).await?,
            None => {
                debug!(recommendor_id = id, "rendering Mini Program QR locally");
                Self::render_local(&format!(
                    "https://open.weixin.qq.com/connect/qrconnect?appid={}&path={}",
                    self.config.app_id, wx_path
                ))?
            }
        };

        Ok(QrCodePair { web, wxapp })
    }
}
