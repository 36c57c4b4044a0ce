/// ログ基盤モジュール
///
/// Lambda環境向けの構造化ログ（JSON形式、CloudWatch Logs向け）を設定する。
/// 1回の呼び出しに属するログはリクエストIDを持つspanにまとめる。
use std::sync::Once;

use tracing::{Span, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Lambda環境向けのログサブスクライバーを初期化する
///
/// `RUST_LOG`でフィルタリングし、未設定時は`info`。
/// 複数回呼び出しても最初の1回だけ初期化する。
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // 既に別のサブスクライバーがある場合（テスト等）は無視
        let _ = json_subscriber(env_filter, std::io::stdout).try_init();
    });
}

/// JSON形式（1イベント1行、現在のspanのフィールド付き）のサブスクライバーを組み立てる
fn json_subscriber<W>(env_filter: EnvFilter, make_writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .flatten_event(true)
        .with_current_span(true)
        .with_writer(make_writer);

    tracing_subscriber::registry().with(env_filter).with(json_layer)
}

/// 1回のLambda呼び出しを表すspanを作成する
///
/// # Arguments
/// * `handler` - ハンドラー名（`notify`、`queue_drain`等）
/// * `request_id` - Lambdaコンテキストのリクエスト ID
pub fn invocation_span(handler: &'static str, request_id: &str) -> Span {
    tracing::info_span!("invocation", handler = handler, request_id = %request_id)
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}
