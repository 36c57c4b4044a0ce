// API Gatewayエコーハンドラー
//
// 外部呼び出しを行わず、現在時刻を埋め込んだメッセージを返すだけのハンドラー。

use tracing::info;

use crate::domain::{Clock, ResponseEnvelope, SystemClock};

/// API Gatewayエコーハンドラー
pub struct GatewayEchoHandler<C = SystemClock>
where
    C: Clock,
{
    clock: C,
}

impl GatewayEchoHandler<SystemClock> {
    /// システム時刻を使うハンドラーを作成
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for GatewayEchoHandler<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> GatewayEchoHandler<C>
where
    C: Clock,
{
    /// 時計を指定してハンドラーを作成
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// リクエストを処理してレスポンスを生成
    ///
    /// イベントの内容は参照しない。エラーになる経路はない。
    pub fn handle(&self) -> ResponseEnvelope {
        let timestamp = self.clock.now_millis();
        info!(timestamp = timestamp, "エコーレスポンス生成");

        ResponseEnvelope::ok(format!("Hello lambda api gateway {}", timestamp))
    }
}
