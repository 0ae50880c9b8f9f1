use serde::Serialize;

/// 班別が特定できなかったときのメッセージ
pub const UNDETERMINED_MESSAGE: &str = "無法確定班別和時間資訊";

/// 現在の班別の表示用情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentShiftInfo {
    pub input_time: String,            // 例: "2025-03-17 15:00"
    pub natural_date_chinese: String,  // 例: "2025年3月17日"
    pub clinical_date_chinese: String,
    pub current_shift: CurrentShiftName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentShiftName {
    pub full_name: String, // 例: "2025年3月16日 大夜班"
}

/// コマンドの返り値
///
/// 特定できないことは正常な結果の一つ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ShiftInfo {
    Found(CurrentShiftInfo),
    Undetermined { error: String },
}

impl ShiftInfo {
    pub fn undetermined() -> Self {
        ShiftInfo::Undetermined {
            error: UNDETERMINED_MESSAGE.to_string(),
        }
    }
}

/// 1日分の班別一覧の1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRowDto {
    pub short_label: String,
    pub long_label: String,
    pub start: String,
    pub end: String,
    pub is_overnight: bool,
}

/// 臨床日ごとの班別一覧
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTableDto {
    pub clinical_date: String,
    pub location: String,
    pub rows: Vec<ShiftRowDto>,
}
