use chrono::{NaiveDate, NaiveDateTime};

use crate::application::dto::{CurrentShiftInfo, CurrentShiftName, ShiftInfo, ShiftRowDto, ShiftTableDto};
use crate::domain::date_format::{format_date, format_date_time};
use crate::domain::shift_logic::{resolve, shift_instances_for_date};
use crate::domain::shift_model::ResolutionResult;
use crate::error::ResolveError;
use crate::AppServices;

// --- Resolve ---

/// `at` が None なら時計から一度だけ現在時刻を読む
pub fn resolve_shift(
    services: &AppServices,
    at: Option<NaiveDateTime>,
) -> Result<(NaiveDateTime, Option<ResolutionResult>), ResolveError> {
    let at = at.unwrap_or_else(|| services.clock.now());
    let config = services.config.config();
    let result = resolve(at, &config.clinical_units, &config.shifts)?;
    Ok((at, result))
}

/// 現在の班別と日付情報を表示用にまとめる
pub fn current_shift_info(
    services: &AppServices,
    at: Option<NaiveDateTime>,
) -> Result<ShiftInfo, ResolveError> {
    let (at, result) = resolve_shift(services, at)?;

    Ok(match result {
        Some(result) => ShiftInfo::Found(CurrentShiftInfo {
            input_time: format_date_time(at),
            natural_date_chinese: result.natural_date_chinese,
            clinical_date_chinese: result.clinical_date_chinese,
            current_shift: CurrentShiftName {
                full_name: result.current_shift.full_shift_name,
            },
        }),
        None => ShiftInfo::undetermined(),
    })
}

// --- Table ---

/// 指定した臨床日を基準とした班別の一覧 (入力順)
pub fn shift_table(services: &AppServices, clinical_date: NaiveDate) -> Result<ShiftTableDto, ResolveError> {
    let config = services.config.config();
    config.validate()?;
    let unit = config.active_unit().ok_or(ResolveError::NoClinicalUnit)?;

    let rows = shift_instances_for_date(unit, &config.shifts, clinical_date)
        .into_iter()
        .map(|resolved| ShiftRowDto {
            short_label: resolved.shift.short_label,
            long_label: resolved.shift.long_label,
            start: resolved.shift_start_display,
            end: resolved.shift_end_display,
            is_overnight: resolved.is_overnight,
        })
        .collect();

    Ok(ShiftTableDto {
        clinical_date: format_date(clinical_date),
        location: unit.location.clone(),
        rows,
    })
}
