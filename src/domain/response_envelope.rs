/// レスポンスエンベロープ
///
/// 全ハンドラーが返却する固定形状のレスポンス（ステータス、CORSヘッダー、JSONボディ）を表現する。
/// API Gateway プロキシ統合のレスポンス形式と互換性を持つ。
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Access-Control-Allow-Origin ヘッダー名
pub const HEADER_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
/// Access-Control-Allow-Headers ヘッダー名
pub const HEADER_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
/// Access-Control-Allow-Methods ヘッダー名
pub const HEADER_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";

/// 成功時のステータスコード
pub const STATUS_OK: u16 = 200;

/// 全ハンドラー共通のレスポンス
///
/// シリアライズ形式:
/// `{"statusCode":200,"headers":{...},"body":"{\"message\":\"...\"}"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// HTTPステータスコード
    pub status_code: u16,
    /// CORSヘッダー
    pub headers: BTreeMap<String, String>,
    /// `{"message": ...}` をJSONエンコードした文字列
    pub body: String,
}

impl ResponseEnvelope {
    /// 成功レスポンスを作成
    ///
    /// 全ハンドラーはこの関数だけでレスポンスを組み立てる。
    ///
    /// # Arguments
    /// * `message` - ボディの`message`フィールドに入れる文字列
    pub fn ok(message: impl Into<String>) -> Self {
        let body = json!({ "message": message.into() }).to_string();

        Self {
            status_code: STATUS_OK,
            headers: Self::cors_headers(),
            body,
        }
    }

    /// CORSヘッダーを生成
    ///
    /// - Access-Control-Allow-Origin: *
    /// - Access-Control-Allow-Headers: Content-Type
    /// - Access-Control-Allow-Methods: OPTIONS,GET
    pub fn cors_headers() -> BTreeMap<String, String> {
        BTreeMap::from([
            (HEADER_ALLOW_ORIGIN.to_string(), "*".to_string()),
            (HEADER_ALLOW_HEADERS.to_string(), "Content-Type".to_string()),
            (HEADER_ALLOW_METHODS.to_string(), "OPTIONS,GET".to_string()),
        ])
    }

    /// ボディの`message`フィールドを取り出す
    ///
    /// ボディが想定した形でない場合は`None`
    pub fn message(&self) -> Option<String> {
        serde_json::from_str::<serde_json::Value>(&self.body)
            .ok()?
            .get("message")?
            .as_str()
            .map(str::to_string)
    }
}
