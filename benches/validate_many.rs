//! This bench test simulates validating a large extracted requirements
//! document.

#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};

/// Generates a document with the given number of categories, each holding one
/// sub-category of `requirements_per_category` fully-populated requirements.
fn build_document(categories: usize, requirements_per_category: usize) -> Value {
    let requirement = json!({
        "title": "요구사항",
        "description": "사용자가 목록을 조회하고 상세 화면으로 이동해 내용을 확인한 뒤 결과를 저장할 수 있다",
        "ac": [
            {"type": "functional"},
            {"type": "accessibility"},
            {"type": "performance"},
        ],
        "dataRules": ["규칙1", "규칙2", "규칙3"],
        "exceptions": ["예외1", "예외2"],
        "roles": ["user"],
        "trace": {"screens": ["S-01"], "apis": ["/api"]},
    });

    let category = |index: usize| {
        json!({
            "category": format!("영역 {index}"),
            "subCategories": [{
                "subCategory": "기본",
                "requirements": vec![requirement.clone(); requirements_per_category],
            }],
        })
    };

    json!({
        "categories": (0..categories).map(category).collect::<Vec<_>>(),
        "nonFunctionalRequirements": [{
            "statement": "주요 화면은 2초 이내에 로드되어야 한다",
            "metric": "p95 로드 시간",
            "howToVerify": "Lighthouse 측정",
        }],
        "meta": {"totalScreens": 1, "scheduleWeeks": 4},
        "screens": [{}],
        "wbs": [{"effortPW": 20}],
    })
}

fn validate_many(c: &mut Criterion) {
    let document = build_document(20, 25);

    c.bench_function("validate 500 requirements", |b| {
        b.iter(|| reqcheck::validate(std::hint::black_box(&document)));
    });
}

criterion_group!(benches, validate_many);
criterion_main!(benches);
