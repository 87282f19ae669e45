use rmcp::model::{GetPromptResult, PromptMessage, PromptMessageRole};

pub fn daily_coaching_review_prompt(focus: Option<&str>) -> GetPromptResult {
    let focus = focus.map(str::trim).filter(|f| !f.is_empty());
    let focus_line = match focus {
        Some(f) => format!("\n\nPay particular attention to {}.", f),
        None => String::new(),
    };
    GetPromptResult::new(vec![PromptMessage::new_text(
        PromptMessageRole::User,
        format!(
            "Review what I ate and drank today.\n\nUse evaluate_daily_comments with my totals for calories, protein, carbs, fat, water, TDEE and body weight (use evaluate_insights_payload instead if you have the raw day-insights JSON). Then:\n1. Restate each comment in plain words\n2. Suggest one concrete change for tomorrow per warning\n3. Call out what went well\n\nIf a category is missing from the result, say nothing about it rather than guessing. Use explain_daily_comments if I ask why a comment did or did not appear.{}",
            focus_line
        ),
    )])
    .with_description(match focus {
        Some(f) => format!("Daily coaching review focused on {}", f),
        None => "Daily coaching review".to_string(),
    })
}
