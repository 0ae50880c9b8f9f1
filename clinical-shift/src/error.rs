use std::path::PathBuf;

use thiserror::Error;

use crate::domain::models::{ClinicalUnitId, ShiftId};

/// 設定の不備による解決エラー
///
/// 該当する班別が見つからないことはエラーではない (`Ok(None)` で返す)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no clinical unit supplied")]
    NoClinicalUnit,

    #[error("shift {shift_id} references unknown clinical unit {clinical_unit_id}")]
    UnknownClinicalUnit {
        shift_id: ShiftId,
        clinical_unit_id: ClinicalUnitId,
    },

    #[error("clinical unit {unit_id} has invalid day begin {hour}:{offset}")]
    InvalidDayBegin {
        unit_id: ClinicalUnitId,
        hour: u32,
        offset: u32,
    },

    #[error("shift {shift_id} has invalid begin {hour}:{offset}")]
    InvalidShiftBegin {
        shift_id: ShiftId,
        hour: u32,
        offset: u32,
    },

    #[error("shift {shift_id} has non-positive duration {duration}")]
    NonPositiveDuration { shift_id: ShiftId, duration: i64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] ResolveError),
}
