/// テーブルに書き込むアイテム
///
/// `id`（パーティションキー）と`message`の2つの文字列属性を持つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableItem {
    /// パーティションキー（タイムスタンプの10進文字列）
    pub id: String,
    /// メッセージ本文
    pub message: String,
}

impl TableItem {
    /// タイムスタンプからアイテムを作成
    ///
    /// 同一ミリ秒内の書き込みは同じ`id`になり上書きされる。
    pub fn from_timestamp(timestamp_millis: u64) -> Self {
        Self {
            id: timestamp_millis.to_string(),
            message: format!("lambda write to ddb {}", timestamp_millis),
        }
    }
}
