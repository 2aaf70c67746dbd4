//! Structural and completeness validation of functional requirements.

use serde_json::Value;

use super::{Findings, array_len, non_empty_str};

/// Minimum description length, in characters.
const MIN_DESCRIPTION_CHARS: usize = 40;
/// Minimum number of acceptance criteria per requirement.
const MIN_ACCEPTANCE_CRITERIA: usize = 3;
/// Minimum number of data rules per requirement.
const MIN_DATA_RULES: usize = 3;
/// Minimum number of exception cases per requirement.
const MIN_EXCEPTIONS: usize = 2;

/// Walks every requirement under `categories` and validates it.
///
/// A missing or non-array `categories` is a single error that halts the rest
/// of this check. A category without `subCategories` is a warning and its
/// requirements are skipped; a sub-category without `requirements` is skipped
/// silently. That asymmetry is part of the contract.
pub(super) fn check(document: &Value, findings: &mut Findings) {
    let Some(categories) = document.get("categories").and_then(Value::as_array) else {
        findings.error("categories가 없거나 배열이 아닙니다");
        return;
    };

    for (category_index, category) in categories.iter().enumerate() {
        let Some(sub_categories) = category.get("subCategories").and_then(Value::as_array) else {
            let name = category
                .get("category")
                .and_then(Value::as_str)
                .unwrap_or("(이름 없음)");
            findings.warning(format!("카테고리 '{name}'에 subCategories가 없습니다"));
            continue;
        };

        for sub_category in sub_categories {
            let Some(requirements) = sub_category.get("requirements").and_then(Value::as_array)
            else {
                continue;
            };

            for (requirement_index, requirement) in requirements.iter().enumerate() {
                check_requirement(requirement, category_index, requirement_index, findings);
            }
        }
    }
}

fn check_requirement(
    requirement: &Value,
    category_index: usize,
    requirement_index: usize,
    findings: &mut Findings,
) {
    // Synthesized ids deliberately omit the sub-category index, so they can
    // collide across sub-categories of one category when explicit ids are
    // absent. Upstream consumers rely on the scheme as-is.
    let id = non_empty_str(requirement, "id").map_or_else(
        || format!("FR-{}-{}", category_index + 1, requirement_index + 1),
        str::to_string,
    );

    if non_empty_str(requirement, "title").is_none() {
        findings.error(format!("{id}: title이 비어 있습니다"));
    }

    let description_chars = requirement
        .get("description")
        .and_then(Value::as_str)
        .map_or(0, |description| description.chars().count());
    if description_chars < MIN_DESCRIPTION_CHARS {
        findings.warning(format!(
            "{id}: description이 {MIN_DESCRIPTION_CHARS}자 미만입니다 (현재 {description_chars}자)"
        ));
    }

    check_acceptance_criteria(requirement, &id, findings);

    if array_len(requirement, "dataRules") < MIN_DATA_RULES {
        findings.warning(format!("{id}: dataRules가 {MIN_DATA_RULES}개 미만입니다"));
    }

    if array_len(requirement, "exceptions") < MIN_EXCEPTIONS {
        findings.warning(format!("{id}: exceptions가 {MIN_EXCEPTIONS}개 미만입니다"));
    }

    if array_len(requirement, "roles") == 0 {
        findings.warning(format!("{id}: roles가 비어 있습니다"));
    }

    match requirement.get("trace") {
        Some(trace) if trace.is_object() => {
            if array_len(trace, "screens") == 0 {
                findings.warning(format!("{id}: trace.screens가 비어 있습니다"));
            }
            if array_len(trace, "apis") == 0 {
                findings.warning(format!("{id}: trace.apis가 비어 있습니다"));
            }
        }
        _ => findings.warning(format!("{id}: trace가 없습니다")),
    }
}

fn check_acceptance_criteria(requirement: &Value, id: &str, findings: &mut Findings) {
    let criteria = requirement.get("ac").and_then(Value::as_array);
    let Some(criteria) = criteria.filter(|criteria| criteria.len() >= MIN_ACCEPTANCE_CRITERIA)
    else {
        findings.warning(format!(
            "{id}: 인수 조건(ac)이 {MIN_ACCEPTANCE_CRITERIA}개 미만입니다"
        ));
        return;
    };

    let types: Vec<&str> = criteria
        .iter()
        .filter_map(|entry| entry.get("type").and_then(Value::as_str))
        .collect();
    let has = |wanted: &str| types.iter().any(|candidate| *candidate == wanted);

    let mut missing = Vec::new();
    if !has("functional") {
        missing.push("functional");
    }
    if !has("accessibility") {
        missing.push("accessibility");
    }
    // Either error or performance coverage satisfies the third group.
    if !has("error") && !has("performance") {
        missing.push("error/performance");
    }

    if !missing.is_empty() {
        findings.warning(format!(
            "{id}: 인수 조건 유형이 부족합니다 (누락: {})",
            missing.join(", ")
        ));
    }
}
