use async_trait::async_trait;
use serde::Deserialize;

use crate::wechat::application::ports::outgoing::wechat_api::{
    AccessToken, WechatApi, WechatApiError,
};

const DEFAULT_API_BASE: &str = "https://api.weixin.qq.com";

#[derive(Clone, Debug)]
pub struct WechatHttpClient {
    http: reqwest::Client,
    api_base: String,
}

impl WechatHttpClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    #[cfg(test)]
    fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
        }
    }
}

impl Default for WechatHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<u64>,
    #[serde(default)]
    errcode: i64,
    #[serde(default)]
    errmsg: String,
}

fn parse_token_response(body: &[u8]) -> Result<AccessToken, WechatApiError> {
    let parsed: TokenResponse = serde_json::from_slice(body)
        .map_err(|e| WechatApiError::Malformed(e.to_string()))?;

    if parsed.errcode != 0 {
        return Err(WechatApiError::Platform {
            errcode: parsed.errcode,
            errmsg: parsed.errmsg,
        });
    }

    match (parsed.access_token, parsed.expires_in) {
        (Some(token), Some(expires_in)) => Ok(AccessToken { token, expires_in }),
        _ => Err(WechatApiError::Malformed(
            "token response missing access_token".to_string(),
        )),
    }
}

// The platform answers errors as JSON and success as raw image bytes.
fn parse_wxa_code_response(content_type: &str, body: &[u8]) -> Result<Vec<u8>, WechatApiError> {
    #[derive(Debug, Deserialize)]
    struct ErrorResponse {
        #[serde(default)]
        errcode: i64,
        #[serde(default)]
        errmsg: String,
    }

    if let Ok(parsed) = serde_json::from_slice::<ErrorResponse>(body) {
        if parsed.errcode != 0 {
            return Err(WechatApiError::Platform {
                errcode: parsed.errcode,
                errmsg: parsed.errmsg,
            });
        }
    }

    if content_type != "image/jpeg" && content_type != "image/png" {
        return Err(WechatApiError::Malformed(format!(
            "expected an image, got content type {}",
            content_type
        )));
    }

    Ok(body.to_vec())
}

#[async_trait]
impl WechatApi for WechatHttpClient {
    async fn fetch_access_token(
        &self,
        app_id: &str,
        secret: &str,
    ) -> Result<AccessToken, WechatApiError> {
        let url = format!(
            "{}/cgi-bin/token?grant_type=client_credential&appid={}&secret={}",
            self.api_base, app_id, secret
        );

        let body = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| WechatApiError::Transport(e.to_string()))?
            .bytes()
            .await
            .map_err(|e| WechatApiError::Transport(e.to_string()))?;

        parse_token_response(&body)
    }

    async fn fetch_wxa_code(
        &self,
        access_token: &str,
        page: &str,
        scene: &str,
    ) -> Result<Vec<u8>, WechatApiError> {
        let url = format!(
            "{}/wxa/getwxacodeunlimit?access_token={}",
            self.api_base, access_token
        );

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "page": page,
                "scene": scene,
                "width": 256,
                "check_path": false,
                "auto_color": false,
            }))
            .send()
            .await
            .map_err(|e| WechatApiError::Transport(e.to_string()))?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
            .unwrap_or_default();

        let body = response
            .bytes()
            .await
            .map_err(|e| WechatApiError::Transport(e.to_string()))?;

        parse_wxa_code_response(&content_type, &body)
    }
}
