#![allow(dead_code)]

use clinical_shift::application::dto::ShiftTableDto;
use clinical_shift::ResolutionResult;

pub fn show_resolution_debug_data(at: &str, result: &Option<ResolutionResult>) {
    println!("\n=======================================================");
    println!("🕒 [DEBUG] 判定時刻: {}", at);
    println!("=======================================================");

    match result {
        Some(result) => {
            let shift = &result.current_shift;
            println!("   自然日: {} ({})", result.natural_date_string, result.natural_date_chinese);
            println!("   臨床日: {} ({})", result.clinical_date_string, result.clinical_date_chinese);
            println!(
                "   班別  : [{}] {} {} ~ {}{}",
                shift.shift.short_label,
                shift.full_shift_name,
                shift.shift_start_display,
                shift.shift_end_display,
                if shift.is_overnight { " (夜勤)" } else { "" }
            );
        }
        None => {
            println!("   (該当する班別なし)");
        }
    }
    println!("=======================================================\n");
}

pub fn show_shift_table_debug_data(table: &ShiftTableDto) {
    println!("\n=======================================================");
    println!("📋 [DEBUG] {} / 臨床日 {}", table.location, table.clinical_date);
    println!("=======================================================");
    for row in &table.rows {
        println!(
            "   ┣ [{}] {:<6} {} ~ {}",
            row.short_label, row.long_label, row.start, row.end
        );
    }
    println!("=======================================================\n");
}
