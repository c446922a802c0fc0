//! Tests for the full scoring pipeline

use super::*;
use crate::config::ScoringConfig;
use proptest::prelude::*;

fn raw(name: &str, arch: &str, year: i32, params: f64, flops: &str, energy: f64, mmlu: &str) -> RawModelRecord {
    RawModelRecord {
        name: name.to_string(),
        architecture: arch.to_string(),
        year,
        parameters_b: params,
        training_flops: flops.to_string(),
        energy_per_pflop: energy,
        mmlu: mmlu.to_string(),
    }
}

fn two_model_table() -> ModelTable {
    ModelTable::new(vec![
        ModelRecord::new("Dense-70B", Architecture::Dense, 2020, 70.0, Some(1000.0), 40.0),
        ModelRecord::new("Sparse-50B", Architecture::MoE, 2024, 50.0, Some(500.0), 30.0),
    ])
}

#[test]
fn test_end_to_end_hand_computed() {
    let config = ScoringConfig::default().with_overrides([("Sparse-50B", 10.0)]);
    let scored = ScoringPipeline::new(config).score(two_model_table()).unwrap();

    // Dense, pre-2024: penalty applies, age 4 years hits the 0.8 floor
    let dense_eff = (1000.0 / 70f64.powf(0.5)) * (40.0 / 50.0) * 1.2;
    let dense_score = 70f64.ln() * 1.0 / dense_eff.powf(0.45) * 0.8;
    // MoE, 2024: no penalty, no decay, override forces 10B active
    let moe_eff = (500.0 / 50f64.powf(0.5)) * (30.0 / 50.0);
    let moe_score = 10f64.ln() * 1.0 / moe_eff.powf(0.48) * 1.0;

    let dense = scored.get("Dense-70B").unwrap();
    let moe = scored.get("Sparse-50B").unwrap();
    assert!((dense.flops_efficiency_score.unwrap() - dense_eff).abs() < 1e-6);
    assert!((moe.flops_efficiency_score.unwrap() - moe_eff).abs() < 1e-6);
    assert_eq!(moe.active_parameters, Some(10.0));
    assert!((dense.final_score.unwrap() - dense_score).abs() < 1e-6);
    assert!((moe.final_score.unwrap() - moe_score).abs() < 1e-6);

    // Literal values for the same inputs
    assert!((dense.final_score.unwrap() - 0.402_207_465_436_373).abs() < 1e-6);
    assert!((moe.final_score.unwrap() - 0.381_022_206_306_73).abs() < 1e-6);
}

#[test]
fn test_end_to_end_ranking() {
    let config = ScoringConfig::default().with_overrides([("Sparse-50B", 10.0)]);
    let scored = ScoringPipeline::new(config).score(two_model_table()).unwrap();
    let board = Leaderboard::from_table(&scored);
    assert_eq!(board.entries()[0].model, "Dense-70B");
    assert_eq!(board.entries()[1].model, "Sparse-50B");
}

#[test]
fn test_run_from_raw_rows() {
    let rows = vec![
        raw("GPT-4o", "MoE", 2024, 1800.0, "2.1e25", 0.8, "88.7%"),
        raw("Legacy", "Dense", 2021, 175.0, "3.1e23", 1.2, "~70%"),
        raw("Mystery", "Dense", 2024, 8.0, "N/A", 1.0, "N/A"),
    ];
    let pipeline = ScoringPipeline::new(ScoringConfig::default());
    let table = pipeline.score(pipeline.clean(&rows).unwrap()).unwrap();

    assert_eq!(table.names(), vec!["GPT-4o", "Legacy", "Mystery"]);
    assert_eq!(table.get("GPT-4o").unwrap().active_parameters, Some(200.0));
    assert!(!table.get("Mystery").unwrap().is_comparable());
    assert!(table.get("Legacy").unwrap().is_comparable());

    let board = pipeline.run(&rows).unwrap();
    assert_eq!(board.len(), 3);
    assert_eq!(board.entries()[2].model, "Mystery");
}

#[test]
fn test_efficiency_uses_uncapped_flops() {
    let pipeline = ScoringPipeline::new(ScoringConfig::default());
    let table = ModelTable::new(vec![ModelRecord::new("big", Architecture::MoE, 2024, 4.0, Some(1e12), 50.0)]);
    let scored = pipeline.score(table).unwrap();
    let row = &scored.rows()[0];

    let cap = 4f64.powf(0.8) * 1000.0;
    assert!((row.training_flops.unwrap() - cap).abs() < 1e-9);
    assert!((row.flops_efficiency_score.unwrap() / 5e11 - 1.0).abs() < 1e-12);
}

#[test]
fn test_stage_order() {
    assert_eq!(Stage::ORDER.first(), Some(&Stage::EfficiencyScore));
    assert_eq!(Stage::ORDER.last(), Some(&Stage::FinalScore));
    let cap = Stage::ORDER.iter().position(|s| *s == Stage::FlopsCap).unwrap();
    let penalty = Stage::ORDER.iter().position(|s| *s == Stage::LegacyPenalty).unwrap();
    assert!(penalty < cap);
}

#[test]
fn test_custom_override_lookup() {
    let pipeline = ScoringPipeline::new(ScoringConfig::default());
    let scored = pipeline.score_with_overrides(two_model_table(), &NoOverrides).unwrap();
    assert!((scored.get("Sparse-50B").unwrap().active_parameters.unwrap() - 40.0).abs() < 1e-9);
}

#[test]
fn test_unvalidated_decay_floor_scores_without_panic() {
    let config = ScoringConfig { age_decay_floor: 1.5, ..ScoringConfig::default() };
    let scored = ScoringPipeline::new(config).score(two_model_table()).unwrap();
    for row in scored.rows() {
        assert!((row.age_decay.unwrap() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_zero_energy_ranks_last() {
    let rows = vec![
        raw("Good", "Dense", 2024, 70.0, "1e24", 1.0, "60"),
        raw("ZeroEnergy", "Dense", 2024, 70.0, "1e24", 0.0, "60"),
    ];
    let board = ScoringPipeline::default().run(&rows).unwrap();
    let last = &board.entries()[1];
    assert_eq!(board.entries()[0].model, "Good");
    assert!(board.entries()[0].comparable);
    assert_eq!(last.model, "ZeroEnergy");
    assert!(last.score.is_infinite());
    assert!(!last.comparable);
}

fn architecture() -> impl Strategy<Value = Architecture> {
    prop_oneof![Just(Architecture::Dense), Just(Architecture::MoE)]
}

fn record() -> impl Strategy<Value = ModelRecord> {
    (architecture(), 1900i32..2030, 0.1f64..5000.0, 1.0f64..1e26, 0.0f64..100.0).prop_map(
        |(arch, year, params, flops, energy)| {
            ModelRecord::new("m", arch, year, params, Some(flops), energy)
        },
    )
}

fn table() -> impl Strategy<Value = ModelTable> {
    proptest::collection::vec(record(), 1..20).prop_map(|rows| {
        ModelTable::new(
            rows.into_iter()
                .enumerate()
                .map(|(i, mut r)| {
                    r.name = format!("model-{i}");
                    r
                })
                .collect(),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_mmlu_clean_bounded(text in "~?[0-9]{1,3}(\\.[0-9]{1,2})?%?|N/A|[a-z]{0,5}") {
        if let Some(v) = normalize_mmlu(&text) {
            prop_assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn prop_derived_invariants(t in table()) {
        let config = ScoringConfig::default();
        let original = t.clone();
        let scored = ScoringPipeline::new(config.clone()).score(t).unwrap();

        prop_assert_eq!(scored.names(), original.names());
        for row in scored.rows() {
            let decay = row.age_decay.unwrap();
            prop_assert!((0.8..=1.0).contains(&decay));
            prop_assert!(row.active_parameters.unwrap() <= row.parameters_b);
            prop_assert!(row.training_flops.unwrap() <= config.flops_cap(row.parameters_b));
            prop_assert!(row.final_score.is_some());
        }
    }

    #[test]
    fn prop_legacy_penalty_exact(t in table()) {
        let config = ScoringConfig::default();
        let mut base = t.clone();
        compute_efficiency_scores(&mut base, &config);
        let mut penalized = base.clone();
        apply_legacy_penalty(&mut penalized, &config).unwrap();

        for (b, p) in base.rows().iter().zip(penalized.rows()) {
            let before = b.flops_efficiency_score.unwrap();
            let after = p.flops_efficiency_score.unwrap();
            if b.architecture == Architecture::Dense && b.year < 2024 {
                prop_assert_eq!(after, before * 1.2);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn prop_ranking_sorted_and_complete(t in table()) {
        let scored = ScoringPipeline::new(ScoringConfig::default()).score(t).unwrap();
        let board = Leaderboard::from_table(&scored);
        prop_assert_eq!(board.len(), scored.len());
        for pair in board.entries().windows(2) {
            if pair[0].comparable && pair[1].comparable {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }
    }
}
