use daily_coach::{
    CATEGORY_ORDER, Category, Comment, DailyMetrics, Goals, MAX_COMMENTS, RuleSet, Tone,
    evaluate_daily_comments, evaluate_rules, order_for_display, reduce_by_category,
};

fn ids(comments: &[Comment]) -> Vec<&str> {
    comments.iter().map(|c| c.id.as_str()).collect()
}

fn scenario_day() -> DailyMetrics {
    DailyMetrics {
        total_kcal: 1800.0,
        kcal_target: Some(2000.0),
        protein_grams: Some(110.0),
        carb_grams: Some(200.0),
        fat_grams: Some(50.0),
        water_ml: Some(1200.0),
        tdee: Some(2200.0),
        weight_kg: Some(80.0),
        ..Default::default()
    }
}

/// A day where every category produces a comment.
fn everything_fires() -> DailyMetrics {
    DailyMetrics {
        total_kcal: 1000.0,
        kcal_target: Some(3000.0),
        protein_grams: Some(10.0),
        carb_grams: Some(10.0),
        fat_grams: Some(5.0),
        water_ml: Some(100.0),
        tdee: Some(2500.0),
        weight_kg: Some(70.0),
        ..Default::default()
    }
}

#[test]
fn end_to_end_scenario() {
    let out = evaluate_daily_comments(&scenario_day());
    assert_eq!(ids(&out), vec!["kcal-ok", "protein-ok", "water-ok"]);
    assert!(out.iter().all(|c| c.tone == Tone::Good));
}

#[test]
fn all_null_day_is_total() {
    let out = evaluate_daily_comments(&DailyMetrics::default());
    assert!(out.is_empty());

    let parsed = DailyMetrics::from_insights_json(
        r#"{"totalKcal":null,"kcalTarget":null,"proteinGrams":null,"carbGrams":null,
            "fatGrams":null,"waterMl":null,"tdee":null,"weightKg":null,
            "targetWeightKg":null,"goals":{}}"#,
    )
    .expect("parse");
    assert!(evaluate_daily_comments(&parsed).is_empty());
}

#[test]
fn nonsense_inputs_do_not_panic() {
    let days = [
        DailyMetrics {
            total_kcal: -500.0,
            kcal_target: Some(2000.0),
            carb_grams: Some(-3.0),
            tdee: Some(1800.0),
            ..Default::default()
        },
        DailyMetrics {
            total_kcal: f64::NAN,
            kcal_target: Some(f64::INFINITY),
            water_ml: Some(f64::NAN),
            weight_kg: Some(-70.0),
            protein_grams: Some(5.0),
            ..Default::default()
        },
    ];
    for day in &days {
        let out = evaluate_daily_comments(day);
        assert!(out.len() <= MAX_COMMENTS);
    }
}

#[test]
fn at_most_one_comment_per_category() {
    for day in [scenario_day(), everything_fires()] {
        let out = evaluate_daily_comments(&day);
        for (i, a) in out.iter().enumerate() {
            for b in &out[i + 1..] {
                assert_ne!(a.category, b.category);
            }
        }
    }
}

#[test]
fn kcal_precedes_tdee() {
    let day = DailyMetrics {
        total_kcal: 2500.0,
        kcal_target: Some(2000.0),
        carb_grams: Some(300.0),
        fat_grams: Some(70.0),
        tdee: Some(2000.0),
        ..Default::default()
    };
    let out = evaluate_daily_comments(&day);
    assert_eq!(ids(&out), vec!["kcal-high", "tdee-high"]);
}

#[test]
fn cap_drops_tail_categories() {
    let day = everything_fires();
    let candidates = evaluate_rules(&day, &RuleSet::DEFAULT);
    let categories: Vec<Category> = candidates.iter().map(|c| c.category).collect();
    assert_eq!(categories, CATEGORY_ORDER.to_vec());

    let out = evaluate_daily_comments(&day);
    assert_eq!(out.len(), MAX_COMMENTS);
    assert_eq!(ids(&out), vec!["kcal-low", "protein-low", "water-low"]);
}

#[test]
fn kcal_branches_fire_exclusively() {
    for (total, expected) in [(900.0, "kcal-low"), (2100.0, "kcal-high"), (1800.0, "kcal-ok")] {
        let day = DailyMetrics {
            total_kcal: total,
            kcal_target: Some(2000.0),
            ..Default::default()
        };
        let kcal: Vec<_> = evaluate_daily_comments(&day)
            .into_iter()
            .filter(|c| c.category == Category::Kcal)
            .collect();
        assert_eq!(kcal.len(), 1);
        assert_eq!(kcal[0].id, expected);
    }
}

#[test]
fn missing_or_zero_target_disables_kcal() {
    for target in [None, Some(0.0)] {
        for total in [0.0, 900.0, 5000.0] {
            let day = DailyMetrics {
                total_kcal: total,
                kcal_target: target,
                ..Default::default()
            };
            assert!(
                evaluate_daily_comments(&day)
                    .iter()
                    .all(|c| c.category != Category::Kcal)
            );
        }
    }
}

#[test]
fn protein_gap_produces_nothing() {
    let day = DailyMetrics {
        protein_grams: Some(80.0),
        goals: Goals {
            protein_goal_g: Some(100.0),
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(evaluate_daily_comments(&day).is_empty());
}

#[test]
fn rule_order_does_not_change_result() {
    for day in [scenario_day(), everything_fires()] {
        let expected = evaluate_daily_comments(&day);
        let candidates = evaluate_rules(&day, &RuleSet::DEFAULT);
        let n = candidates.len();
        // every rotation and its reverse
        for shift in 0..n {
            let mut rotated = candidates.clone();
            rotated.rotate_left(shift);
            assert_eq!(order_for_display(reduce_by_category(rotated.clone())), expected);
            rotated.reverse();
            assert_eq!(order_for_display(reduce_by_category(rotated)), expected);
        }
    }
}

#[test]
fn display_order_ignores_tone() {
    let day = DailyMetrics {
        total_kcal: 1800.0,
        kcal_target: Some(2000.0),
        water_ml: Some(100.0),
        ..Default::default()
    };
    let out = evaluate_daily_comments(&day);
    let ids = ids(&out);
    // kcal is good, water is warn, yet kcal is shown first
    assert_eq!(ids[0], "kcal-ok");
    assert!(ids.contains(&"water-low"));
}
