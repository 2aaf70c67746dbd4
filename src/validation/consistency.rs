//! Cross-document consistency checks.
//!
//! Each check is independent and produces at most one error.

use serde_json::Value;

use super::{Findings, array_len};

/// Working days per week used to convert WBS effort into schedule weeks.
const WORKDAYS_PER_WEEK: f64 = 5.0;
/// Allowed difference, in weeks, between the declared and calculated
/// schedules.
const SCHEDULE_TOLERANCE_WEEKS: f64 = 2.0;

// Screen and week counts are far below 2^53, so the usize-to-f64 casts here
// are exact.
#[allow(clippy::cast_precision_loss)]
pub(super) fn check(document: &Value, findings: &mut Findings) {
    let meta = document.get("meta");

    if let Some(declared_screens) = meta
        .and_then(|meta| meta.get("totalScreens"))
        .and_then(Value::as_f64)
    {
        let actual_screens = array_len(document, "screens");
        if (declared_screens - actual_screens as f64).abs() > f64::EPSILON {
            findings.error(format!(
                "meta.totalScreens({declared_screens})와 screens 길이({actual_screens})가 일치하지 않습니다"
            ));
        }
    }

    if let Some(wbs) = document.get("wbs").and_then(Value::as_array) {
        let total_effort: f64 = wbs
            .iter()
            .map(|item| item.get("effortPW").and_then(Value::as_f64).unwrap_or(0.0))
            .sum();
        let calculated_weeks = (total_effort / WORKDAYS_PER_WEEK).ceil();

        if let Some(schedule_weeks) = meta
            .and_then(|meta| meta.get("scheduleWeeks"))
            .and_then(Value::as_f64)
        {
            if (schedule_weeks - calculated_weeks).abs() > SCHEDULE_TOLERANCE_WEEKS {
                findings.error(format!(
                    "meta.scheduleWeeks({schedule_weeks})와 WBS 기반 산정({calculated_weeks}주)의 차이가 {SCHEDULE_TOLERANCE_WEEKS}주를 초과합니다"
                ));
            }
        }
    }
}
