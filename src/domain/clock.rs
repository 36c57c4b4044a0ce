/// 時刻取得の抽象化
///
/// ハンドラーはエポックミリ秒のタイムスタンプをメッセージ、行キー、オブジェクトキーに埋め込む。
/// テストで時刻を固定できるようにトレイトで抽象化する。
use chrono::Utc;

/// エポックミリ秒を返す時計
pub trait Clock: Send + Sync {
    /// 現在時刻（UNIXエポックからのミリ秒）
    fn now_millis(&self) -> u64;
}

/// システム時刻を使う時計
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // エポック以前の時刻は0に丸める
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}
