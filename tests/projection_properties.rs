//! Property tests for the projection engine

use classpredict::{
    generate_curve, predict_final, CompletionModel, PredictionInput, PredictionSummary,
};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Any valid set of class statistics
#[derive(Debug, Clone, Copy)]
struct ClassStats(PredictionInput);

impl Arbitrary for ClassStats {
    fn arbitrary(g: &mut Gen) -> Self {
        let total = 1 + u32::arbitrary(g) % 500;
        let fulfilled = u32::arbitrary(g) % (total + 1);
        let total_days = 1 + u32::arbitrary(g) % 120;
        let days_left = u32::arbitrary(g) % (total_days + 1);
        ClassStats(PredictionInput::new(total, fulfilled, days_left, total_days).unwrap())
    }
}

#[derive(Debug, Clone, Copy)]
struct Model(CompletionModel);

impl Arbitrary for Model {
    fn arbitrary(g: &mut Gen) -> Self {
        Model(*g.choose(&CompletionModel::ALL).unwrap())
    }
}

#[quickcheck]
fn final_stays_within_class(stats: ClassStats, model: Model) -> bool {
    let input = stats.0;
    let projection = predict_final(&input, model.0);
    projection.final_count >= 0.0 && projection.final_count <= input.total_students() as f64
}

#[quickcheck]
fn final_never_regresses(stats: ClassStats, model: Model) -> bool {
    let input = stats.0;
    predict_final(&input, model.0).final_count >= input.fulfilled_students() as f64
}

#[quickcheck]
fn capped_iff_raw_exceeds_class(stats: ClassStats, model: Model) -> bool {
    let input = stats.0;
    let ratio = input.days_left() as f64 / input.total_days() as f64;
    let raw =
        input.fulfilled_students() as f64 + model.0.shape(ratio) * input.total_students() as f64;
    predict_final(&input, model.0).is_capped == (raw > input.total_students() as f64)
}

#[quickcheck]
fn curve_is_monotone(stats: ClassStats, model: Model) -> bool {
    let input = stats.0;
    let projection = predict_final(&input, model.0);
    let curve = generate_curve(&input, model.0, projection.final_count);
    curve.windows(2).all(|pair| pair[0].students <= pair[1].students)
}

#[quickcheck]
fn curve_covers_every_day(stats: ClassStats, model: Model) -> bool {
    let input = stats.0;
    let projection = predict_final(&input, model.0);
    let curve = generate_curve(&input, model.0, projection.final_count);
    curve.len() == input.total_days() as usize + 1
        && curve.iter().enumerate().all(|(i, p)| p.day as usize == i)
}

#[quickcheck]
fn curve_passes_through_today(stats: ClassStats, model: Model) -> bool {
    let input = stats.0;
    let projection = predict_final(&input, model.0);
    let curve = generate_curve(&input, model.0, projection.final_count);
    curve[input.days_passed() as usize].students == input.fulfilled_students()
}

#[quickcheck]
fn curve_ends_at_final(stats: ClassStats, model: Model) -> bool {
    let input = stats.0;
    let projection = predict_final(&input, model.0);
    let curve = generate_curve(&input, model.0, projection.final_count);
    curve.last().unwrap().students == projection.final_count.round() as u32
}

#[quickcheck]
fn remaining_slots_complement_final(stats: ClassStats, model: Model) -> bool {
    let summary = PredictionSummary::compute(stats.0, model.0);
    summary.rounded_final + summary.remaining_slots == stats.0.total_students()
}

#[test]
fn no_days_left_means_no_new_completions() {
    let input = PredictionInput::new(30, 12, 0, 14).unwrap();
    for model in CompletionModel::ALL {
        let projection = predict_final(&input, model);
        assert_eq!(projection.final_count, 12.0);
        assert!(!projection.is_capped);
    }
}

#[test]
fn linear_reference_example() {
    let input = PredictionInput::new(30, 5, 3, 14).unwrap();
    let summary = PredictionSummary::compute(input, CompletionModel::Linear);

    assert!((summary.projection.final_count - 11.428_571).abs() < 1e-5);
    assert_eq!(summary.rounded_final, 11);
    assert!(!summary.is_capped());
    assert_eq!(format!("{:.1}", summary.completion_percentage), "38.1");
    assert_eq!(summary.remaining_slots, 19);
    assert_eq!(summary.curve[11].students, 5);
    assert_eq!(summary.curve[14].students, 11);
}

#[test]
fn exponential_capped_example() {
    let input = PredictionInput::new(20, 18, 10, 10).unwrap();
    let projection = predict_final(&input, CompletionModel::Exponential);

    assert_eq!(projection.raw_final, 38.0);
    assert!(projection.is_capped);
    assert_eq!(projection.final_count, 20.0);
}
