use daily_coach::{DailyMetrics, config::Config, evaluate_with_rules};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: reads optional DAILY_COACH_* overrides from env
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(());
        }
    };
    let day = DailyMetrics::from_insights_json(
        r#"{
            "totalKcal": 1800, "kcalTarget": 2000,
            "proteinGrams": 110, "carbGrams": 200, "fatGrams": 50,
            "waterMl": 1200, "tdee": 2200, "weightKg": 80
        }"#,
    )?;
    for comment in evaluate_with_rules(&day, &cfg.rule_set()) {
        println!("[{}] {}: {}", comment.tone.as_str(), comment.id, comment.text);
    }
    Ok(())
}
