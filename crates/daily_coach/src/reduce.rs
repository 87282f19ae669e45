//! Collapse candidates to one comment per category.

use crate::Comment;

/// Keep the highest-priority candidate in each category.
///
/// Ties keep the candidate seen first. Categories without candidates produce
/// nothing. Output follows first-seen category order; display order is applied
/// later by [`crate::order_for_display`].
pub fn reduce_by_category(candidates: Vec<Comment>) -> Vec<Comment> {
    let mut kept: Vec<Comment> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match kept.iter_mut().find(|k| k.category == candidate.category) {
            Some(existing) if candidate.priority > existing.priority => *existing = candidate,
            Some(_) => {}
            None => kept.push(candidate),
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Tone};

    #[test]
    fn warn_beats_neutral_beats_good() {
        let out = reduce_by_category(vec![
            Comment::new("a", "", Tone::Good, Category::Water),
            Comment::new("b", "", Tone::Warn, Category::Water),
            Comment::new("c", "", Tone::Neutral, Category::Water),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "b");
    }

    #[test]
    fn ties_keep_first_seen() {
        let out = reduce_by_category(vec![
            Comment::new("first", "", Tone::Neutral, Category::Carb),
            Comment::new("second", "", Tone::Neutral, Category::Carb),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "first");
    }

    #[test]
    fn categories_stay_separate() {
        let out = reduce_by_category(vec![
            Comment::new("fat", "", Tone::Neutral, Category::Fat),
            Comment::new("kcal", "", Tone::Good, Category::Kcal),
        ]);
        let ids: Vec<_> = out.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["fat", "kcal"]);
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(reduce_by_category(Vec::new()).is_empty());
    }
}
