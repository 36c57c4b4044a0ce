// アプリケーション層モジュール
pub mod gateway_echo_handler;
pub mod handler_error;
pub mod notify_handler;
pub mod object_write_handler;
pub mod queue_drain_handler;
pub mod table_write_handler;

// 再エクスポート
pub use gateway_echo_handler::GatewayEchoHandler;
pub use handler_error::HandlerError;
pub use notify_handler::NotifyHandler;
pub use object_write_handler::ObjectWriteHandler;
pub use queue_drain_handler::QueueDrainHandler;
pub use table_write_handler::TableWriteHandler;
