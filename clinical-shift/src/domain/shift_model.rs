use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::domain::date_format::{format_date, format_date_chinese, format_date_time_display};
use crate::domain::models::{Shift, ShiftId};

/// 特定の日付を基準に時刻を確定させた班別
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedShift {
    #[serde(flatten)]
    pub shift: Shift,
    pub shift_start: NaiveDateTime,
    /// 終了分の59秒まで含む
    pub shift_end: NaiveDateTime,
    pub is_overnight: bool,
    /// この班別が属する臨床日 (基準日)
    pub clinical_date_string: String,
    pub shift_start_display: String,
    pub shift_end_display: String,
    /// 例: `2025年3月16日 大夜班`
    pub full_shift_name: String,
}

impl ResolvedShift {
    /// `base_date` の `shift_begin_hour:shift_offset_minutes:00` を開始とし、
    /// 開始 + 長さ(分) の分の 59 秒を終了とする
    ///
    /// 時刻が範囲外なら None
    pub fn on_date(shift: &Shift, base_date: NaiveDate) -> Option<Self> {
        let begin = NaiveTime::from_hms_opt(shift.shift_begin_hour, shift.shift_offset_minutes, 0)?;
        let shift_start = base_date.and_time(begin);
        let shift_end = shift_start
            .checked_add_signed(Duration::try_minutes(shift.shift_duration_minutes)?)?
            .with_second(59)?;

        Some(Self {
            shift: shift.clone(),
            shift_start,
            shift_end,
            is_overnight: shift.is_overnight(),
            clinical_date_string: format_date(base_date),
            shift_start_display: format_date_time_display(shift_start),
            shift_end_display: format_date_time_display(shift_end),
            full_shift_name: format!("{} {}", format_date_chinese(base_date), shift.long_label),
        })
    }

    /// 両端を含む
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.shift_start <= at && at <= self.shift_end
    }
}

/// 判定結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    /// 該当した班別のID
    pub clinical_unit_shift: ShiftId,
    pub current_shift: ResolvedShift,
    pub clinical_date: NaiveDate,
    pub clinical_date_string: String,
    pub clinical_date_chinese: String,
    pub natural_date: NaiveDate,
    pub natural_date_string: String,
    pub natural_date_chinese: String,
}

impl ResolutionResult {
    pub fn new(current_shift: ResolvedShift, clinical_date: NaiveDate, natural_date: NaiveDate) -> Self {
        Self {
            clinical_unit_shift: current_shift.shift.id.clone(),
            current_shift,
            clinical_date,
            clinical_date_string: format_date(clinical_date),
            clinical_date_chinese: format_date_chinese(clinical_date),
            natural_date,
            natural_date_string: format_date(natural_date),
            natural_date_chinese: format_date_chinese(natural_date),
        }
    }
}
