/// API GatewayエコーHTTP Lambdaエントリポイント
///
/// API Gateway（REST API `GET /books`）経由のリクエストを受け、
/// 現在時刻を埋め込んだメッセージをCORSヘッダー付きで返却する。
use lambda_http::{Body, Error, Request, RequestExt, Response, run, service_fn};
use serverless_demo::application::GatewayEchoHandler;
use serverless_demo::domain::ResponseEnvelope;
use serverless_demo::infrastructure::{init_logging, invocation_span};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("API Gatewayエコー Lambda関数を初期化");

    let echo = GatewayEchoHandler::new();
    run(service_fn(|request: Request| handler(&echo, request))).await
}

/// HTTPリクエストハンドラー
///
/// リクエストの内容は参照しない。
async fn handler(echo: &GatewayEchoHandler, request: Request) -> Result<Response<Body>, Error> {
    let request_id = request
        .lambda_context_ref()
        .map(|context| context.request_id.clone())
        .unwrap_or_default();
    invocation_span("gateway_echo", &request_id).in_scope(|| {
        info!(method = %request.method(), path = %request.uri().path(), "リクエスト受信");
        into_http_response(echo.handle())
    })
}

/// レスポンスエンベロープをHTTPレスポンスに変換
fn into_http_response(envelope: ResponseEnvelope) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder().status(envelope.status_code);
    for (name, value) in &envelope.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    Ok(builder.body(Body::Text(envelope.body))?)
}
