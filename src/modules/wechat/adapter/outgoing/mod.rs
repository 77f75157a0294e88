pub mod wechat_http_client;
