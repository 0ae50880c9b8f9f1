use chrono::{NaiveDate, NaiveDateTime, SubsecRound, Timelike};
use tracing::{debug, trace, warn};

use crate::domain::models::{validate_parts, ClinicalUnit, Shift};
use crate::domain::shift_model::{ResolutionResult, ResolvedShift};
use crate::error::ResolveError;

/// 午前0時からの経過分 (秒以下は切り捨て)
pub fn minutes_of_day(at: NaiveDateTime) -> i64 {
    i64::from(at.hour()) * 60 + i64::from(at.minute())
}

/// 時刻が属する臨床日を求める
///
/// 臨床日の開始時刻より前であれば前日扱い
/// ```text
///   unit day begin: 07:01
///
///   2025-03-17 07:00  -> 2025-03-16
///   2025-03-17 07:01  -> 2025-03-17
/// ```
pub fn clinical_date_of(at: NaiveDateTime, unit: &ClinicalUnit) -> Option<NaiveDate> {
    if minutes_of_day(at) < unit.day_start_minutes() {
        at.date().pred_opt()
    } else {
        Some(at.date())
    }
}

/// `base_date` を基準として、臨床単位に属する班別の時刻を確定させる
///
/// 入力の並び順を保つ
pub fn shift_instances_for_date(
    unit: &ClinicalUnit,
    shifts: &[Shift],
    base_date: NaiveDate,
) -> Vec<ResolvedShift> {
    shifts
        .iter()
        .filter(|shift| shift.clinical_unit_id == unit.id)
        .filter_map(|shift| ResolvedShift::on_date(shift, base_date))
        .collect()
}

/// 指定時刻がどの班別・臨床日に属するかを判定する純粋関数
///
/// - 臨床単位は `clinical_units` の先頭のみを使う (残りは無視する)
/// - 候補は「臨床日」と「その前日」を基準にした班別。前日の大夜班が
///   まだ続いている場合を拾うため
/// - 候補を 臨床日 -> 前日 の順、各日は入力順に走査し最初に含むものを採用
/// - 入力の秒未満は切り捨てて比較する (終了分の 59 秒はその1秒全体を含む)
///
/// 該当がなければ `Ok(None)`。設定の不備は `Err`
pub fn resolve(
    at: NaiveDateTime,
    clinical_units: &[ClinicalUnit],
    shifts: &[Shift],
) -> Result<Option<ResolutionResult>, ResolveError> {
    validate_parts(clinical_units, shifts)?;
    let at = at.trunc_subsecs(0);

    let unit = clinical_units.first().ok_or(ResolveError::NoClinicalUnit)?;
    if clinical_units.len() > 1 {
        warn!(
            unit = %unit.id,
            ignored = clinical_units.len() - 1,
            "multiple clinical units supplied, resolving against the first only"
        );
    }

    let Some(clinical_date) = clinical_date_of(at, unit) else {
        return Ok(None);
    };
    let Some(prev_clinical_date) = clinical_date.pred_opt() else {
        return Ok(None);
    };

    let candidates: Vec<ResolvedShift> = shift_instances_for_date(unit, shifts, clinical_date)
        .into_iter()
        .chain(shift_instances_for_date(unit, shifts, prev_clinical_date))
        .collect();

    debug!(
        %at,
        %clinical_date,
        candidates = candidates.len(),
        "resolving shift"
    );

    let matched = candidates.into_iter().find(|candidate| {
        trace!(
            shift = %candidate.shift.id,
            start = %candidate.shift_start,
            end = %candidate.shift_end,
            "candidate"
        );
        candidate.contains(at)
    });

    match matched {
        Some(current_shift) => {
            debug!(
                shift = %current_shift.shift.id,
                clinical_date = %current_shift.clinical_date_string,
                "shift matched"
            );
            Ok(Some(ResolutionResult::new(current_shift, clinical_date, at.date())))
        }
        None => {
            debug!(%at, "no shift covers the timestamp");
            Ok(None)
        }
    }
}
