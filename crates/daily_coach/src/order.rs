//! Display ordering and the cap on shown comments.

use crate::{Category, Comment};

/// Fixed display precedence. Category order dominates tone when showing.
pub const CATEGORY_ORDER: [Category; 6] = [
    Category::Kcal,
    Category::Protein,
    Category::Water,
    Category::Carb,
    Category::Fat,
    Category::Tdee,
];

pub const MAX_COMMENTS: usize = 3;

pub fn precedence(category: Category) -> usize {
    CATEGORY_ORDER
        .iter()
        .position(|c| *c == category)
        .unwrap_or(CATEGORY_ORDER.len())
}

/// Sort reduced comments by [`CATEGORY_ORDER`] and keep the first
/// [`MAX_COMMENTS`].
pub fn order_for_display(mut comments: Vec<Comment>) -> Vec<Comment> {
    comments.sort_by_key(|c| precedence(c.category));
    comments.truncate(MAX_COMMENTS);
    comments
}
