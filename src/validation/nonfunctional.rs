//! Validation of non-functional requirements.

use serde_json::Value;

use super::{Findings, non_empty_str};

/// Validates each entry of `nonFunctionalRequirements`.
///
/// A missing or non-array list is a single warning that halts the rest of
/// this check.
pub(super) fn check(document: &Value, findings: &mut Findings) {
    let Some(nfrs) = document
        .get("nonFunctionalRequirements")
        .and_then(Value::as_array)
    else {
        findings.warning("nonFunctionalRequirements가 없거나 배열이 아닙니다");
        return;
    };

    for (index, nfr) in nfrs.iter().enumerate() {
        let id = non_empty_str(nfr, "id")
            .map_or_else(|| format!("NFR-{}", index + 1), str::to_string);

        if non_empty_str(nfr, "metric").is_none() {
            findings.warning(format!("{id}: metric이 비어 있습니다"));
        }
        if non_empty_str(nfr, "howToVerify").is_none() {
            findings.warning(format!("{id}: howToVerify가 비어 있습니다"));
        }
        // The statement is the requirement itself; its absence is the only
        // NFR-level error.
        if non_empty_str(nfr, "statement").is_none() {
            findings.error(format!("{id}: statement가 비어 있습니다"));
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{super::Findings, check};

    fn run(document: &Value) -> Findings {
        let mut findings = Findings::default();
        check(document, &mut findings);
        findings
    }

    #[test]
    fn missing_list_is_a_single_warning() {
        let findings = run(&json!({}));
        assert!(findings.errors.is_empty());
        assert_eq!(
            findings.warnings,
            vec!["nonFunctionalRequirements가 없거나 배열이 아닙니다"]
        );
    }

    #[test]
    fn complete_nfr_produces_no_findings() {
        let findings = run(&json!({
            "nonFunctionalRequirements": [{
                "id": "NFR-PERF-1",
                "statement": "주요 화면은 2초 이내에 로드되어야 한다",
                "metric": "p95 로드 시간",
                "howToVerify": "Lighthouse 측정",
            }],
        }));
        assert!(findings.errors.is_empty());
        assert!(findings.warnings.is_empty());
    }

    #[test]
    fn missing_statement_is_the_only_error() {
        let findings = run(&json!({
            "nonFunctionalRequirements": [{"metric": "p95", "howToVerify": "측정"}],
        }));
        assert_eq!(findings.errors, vec!["NFR-1: statement가 비어 있습니다"]);
        assert!(findings.warnings.is_empty());
    }

    #[test]
    fn missing_metric_and_verification_are_warnings() {
        let findings = run(&json!({
            "nonFunctionalRequirements": [{"statement": "백업은 매일 수행되어야 한다"}],
        }));
        assert!(findings.errors.is_empty());
        assert_eq!(
            findings.warnings,
            vec![
                "NFR-1: metric이 비어 있습니다",
                "NFR-1: howToVerify가 비어 있습니다",
            ]
        );
    }

    #[test]
    fn ids_are_synthesized_per_index() {
        let findings = run(&json!({
            "nonFunctionalRequirements": [
                {"statement": "ok", "metric": "m", "howToVerify": "v"},
                {},
            ],
        }));
        assert_eq!(findings.errors, vec!["NFR-2: statement가 비어 있습니다"]);
    }
}
