// =====================
// 外部 (エディタ・通知チャネル) から届くイベント
// =====================

use serde::Deserialize;
use serde_json::Value;

/// 文書の保存状態通知 `(documentId, status)`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveStatus {
    pub document_id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct StateChangePayload {
    data: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorPayload {
    error_code: i64,
    error_description: String,
}

/// 既知のイベントはペイロードの型を持ち、それ以外は `Unknown` に落とす
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    DocumentReady,
    DocumentStateChange { is_modified: bool },
    SaveStatus(SaveStatus),
    Error { code: i64, description: String },
    Unknown { name: String, payload: Value },
}

impl EditorEvent {
    /// イベント名と生のペイロードから変換する
    ///
    /// 名前が既知でもペイロードが形式に沿っていなければ `Unknown`
    pub fn from_raw(name: &str, payload: Value) -> Self {
        let parsed = match name {
            "onDocumentReady" => Some(EditorEvent::DocumentReady),
            "onDocumentStateChange" => serde_json::from_value::<StateChangePayload>(payload.clone())
                .ok()
                .map(|p| EditorEvent::DocumentStateChange { is_modified: p.data }),
            "saveStatus" => serde_json::from_value::<SaveStatus>(payload.clone())
                .ok()
                .map(EditorEvent::SaveStatus),
            "onError" => serde_json::from_value::<ErrorPayload>(payload.clone())
                .ok()
                .map(|p| EditorEvent::Error {
                    code: p.error_code,
                    description: p.error_description,
                }),
            _ => None,
        };

        parsed.unwrap_or_else(|| EditorEvent::Unknown {
            name: name.to_string(),
            payload,
        })
    }
}

/// JSON文字列のペイロードから変換する (空文字列は null 扱い)
pub fn parse_event(name: &str, payload_json: &str) -> Result<EditorEvent, serde_json::Error> {
    let payload = if payload_json.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(payload_json)?
    };
    Ok(EditorEvent::from_raw(name, payload))
}
