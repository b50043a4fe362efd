/// Storefront URL that opens the page filtered to `category`
pub fn category_link(category: &str) -> String {
    format!("/?category={}", urlencoding::encode(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_link_encodes_name() {
        assert_eq!(category_link("Wall Panels"), "/?category=Wall%20Panels");
        assert_eq!(category_link("Cornices & Trims"), "/?category=Cornices%20%26%20Trims");
    }
}
