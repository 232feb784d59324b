use api_types::expense::Category;

const OTHER_GLYPH: &str = "📦";

/// Icon for a category name. Unknown names get the `Other` icon.
pub fn glyph(name: &str) -> &'static str {
    match name {
        "Food" => "🍴",
        "Transportation" => "🚗",
        "Entertainment" => "🎬",
        "Shopping" => "🛒",
        "Bills" => "🧾",
        "Healthcare" => "🏥",
        "Education" => "🎓",
        _ => OTHER_GLYPH,
    }
}

pub fn glyph_for(category: Category) -> &'static str {
    glyph(category.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_its_own_glyph() {
        let glyphs: std::collections::HashSet<_> =
            Category::ALL.iter().map(|c| glyph_for(*c)).collect();
        assert_eq!(glyphs.len(), Category::ALL.len());
    }

    #[test]
    fn unknown_falls_back_to_other() {
        assert_eq!(glyph("Yachts"), glyph_for(Category::Other));
        assert_eq!(glyph(""), OTHER_GLYPH);
    }
}
