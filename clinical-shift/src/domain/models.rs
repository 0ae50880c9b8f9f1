// =====================
// ドメインモデル定義
// =====================

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

// IDは不透明な文字列として扱う
pub type ClinicalUnitId = String;
pub type ShiftId = String;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// 臨床単位 (病棟など)
///
/// 臨床日は 0:00 ではなく `day_begin_hour:day_begin_offset_minutes` から始まる
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalUnit {
    pub id: ClinicalUnitId,
    pub location: String,
    pub day_begin_hour: u32,
    pub day_begin_offset_minutes: u32,
    // 判定には使わない
    #[serde(default)]
    pub day_duration_minutes: i64,
}

impl ClinicalUnit {
    /// 臨床日の開始時刻 (午前0時からの分数)
    pub fn day_start_minutes(&self) -> i64 {
        i64::from(self.day_begin_hour) * 60 + i64::from(self.day_begin_offset_minutes)
    }

    pub fn validate(&self) -> Result<(), ResolveError> {
        if self.day_begin_hour > 23 || self.day_begin_offset_minutes >= 60 {
            return Err(ResolveError::InvalidDayBegin {
                unit_id: self.id.clone(),
                hour: self.day_begin_hour,
                offset: self.day_begin_offset_minutes,
            });
        }
        Ok(())
    }
}

/// 班別
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: ShiftId,
    pub clinical_unit_id: ClinicalUnitId,
    pub shift_begin_hour: u32,
    pub shift_offset_minutes: u32,
    pub shift_duration_minutes: i64,
    pub short_label: String,
    pub long_label: String,
}

impl Shift {
    /// 班別の開始時刻 (午前0時からの分数)
    pub fn begin_minutes(&self) -> i64 {
        i64::from(self.shift_begin_hour) * 60 + i64::from(self.shift_offset_minutes)
    }

    /// 日付をまたぐ班別か (大夜班など)
    pub fn is_overnight(&self) -> bool {
        self.begin_minutes().saturating_add(self.shift_duration_minutes) >= MINUTES_PER_DAY
    }

    pub fn validate(&self) -> Result<(), ResolveError> {
        if self.shift_begin_hour > 23 || self.shift_offset_minutes >= 60 {
            return Err(ResolveError::InvalidShiftBegin {
                shift_id: self.id.clone(),
                hour: self.shift_begin_hour,
                offset: self.shift_offset_minutes,
            });
        }
        if self.shift_duration_minutes <= 0 {
            return Err(ResolveError::NonPositiveDuration {
                shift_id: self.id.clone(),
                duration: self.shift_duration_minutes,
            });
        }
        Ok(())
    }
}

/// 呼び出し側から渡される設定一式
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftConfig {
    pub clinical_units: Vec<ClinicalUnit>,
    pub shifts: Vec<Shift>,
}

impl ShiftConfig {
    /// 判定に使う臨床単位 (常に先頭)
    pub fn active_unit(&self) -> Option<&ClinicalUnit> {
        self.clinical_units.first()
    }

    pub fn validate(&self) -> Result<(), ResolveError> {
        validate_parts(&self.clinical_units, &self.shifts)
    }
}

/// 臨床単位と班別の整合性を確認する
pub fn validate_parts(clinical_units: &[ClinicalUnit], shifts: &[Shift]) -> Result<(), ResolveError> {
    if clinical_units.is_empty() {
        return Err(ResolveError::NoClinicalUnit);
    }

    for unit in clinical_units {
        unit.validate()?;
    }

    for shift in shifts {
        shift.validate()?;
        if !clinical_units.iter().any(|u| u.id == shift.clinical_unit_id) {
            return Err(ResolveError::UnknownClinicalUnit {
                shift_id: shift.id.clone(),
                clinical_unit_id: shift.clinical_unit_id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod models_tests {
    use super::*;

    fn unit(hour: u32, offset: u32) -> ClinicalUnit {
        ClinicalUnit {
            id: "u1".to_string(),
            location: "ICU2".to_string(),
            day_begin_hour: hour,
            day_begin_offset_minutes: offset,
            day_duration_minutes: 1439,
        }
    }

    fn shift(hour: u32, offset: u32, duration: i64) -> Shift {
        Shift {
            id: "s1".to_string(),
            clinical_unit_id: "u1".to_string(),
            shift_begin_hour: hour,
            shift_offset_minutes: offset,
            shift_duration_minutes: duration,
            short_label: "N".to_string(),
            long_label: "大夜班".to_string(),
        }
    }

    #[test]
    fn test_day_start_minutes() {
        assert_eq!(unit(7, 1).day_start_minutes(), 421);
        assert_eq!(unit(0, 0).day_start_minutes(), 0);
    }

    #[test]
    fn test_overnight_flag() {
        assert!(shift(23, 1, 479).is_overnight());
        assert!(!shift(7, 1, 479).is_overnight());
        // 15:01 + 479 = 23:00 なのでまたがない
        assert!(!shift(15, 1, 479).is_overnight());
        // ちょうど 24:00 に終わるものは夜勤扱い
        assert!(shift(16, 0, 480).is_overnight());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(unit(24, 0).validate(), Err(ResolveError::InvalidDayBegin { .. })));
        assert!(matches!(unit(7, 60).validate(), Err(ResolveError::InvalidDayBegin { .. })));
        assert!(matches!(shift(7, 1, 0).validate(), Err(ResolveError::NonPositiveDuration { .. })));
        assert!(matches!(shift(25, 0, 10).validate(), Err(ResolveError::InvalidShiftBegin { .. })));
    }

    #[test]
    fn test_validate_parts() {
        assert_eq!(validate_parts(&[], &[]), Err(ResolveError::NoClinicalUnit));

        let mut orphan = shift(7, 1, 479);
        orphan.clinical_unit_id = "missing".to_string();
        assert!(matches!(
            validate_parts(&[unit(7, 1)], &[orphan]),
            Err(ResolveError::UnknownClinicalUnit { .. })
        ));

        assert_eq!(validate_parts(&[unit(7, 1)], &[shift(7, 1, 479)]), Ok(()));
    }

    #[test]
    fn test_config_deserialize_camel_case() {
        let json = r#"{
            "clinicalUnits": [
                { "id": "u1", "location": "ICU2", "dayBeginHour": 7, "dayBeginOffsetMinutes": 1 }
            ],
            "shifts": [
                { "id": "s1", "clinicalUnitId": "u1", "shiftBeginHour": 23, "shiftOffsetMinutes": 1,
                  "shiftDurationMinutes": 479, "shortLabel": "N", "longLabel": "大夜班" }
            ]
        }"#;
        let config: ShiftConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.active_unit().unwrap().day_start_minutes(), 421);
        assert_eq!(config.clinical_units[0].day_duration_minutes, 0);
        assert_eq!(config.shifts[0].long_label, "大夜班");
        assert_eq!(config.validate(), Ok(()));
    }
}
