//! Product catalog module.
//!
//! Contains types for products, categories, brands, and the admin-side
//! product form.

mod category;
mod draft;
mod product;

pub use category::{Brand, Category};
pub use draft::{FieldIssue, ProductDraft, Severity};
pub use product::{Product, ProductImage, ProductStatus};

/// Turn free text into a URL-friendly slug.
///
/// Lowercases ASCII, maps runs of non-alphanumeric characters to single
/// dashes, and trims leading/trailing dashes. Non-ASCII characters (e.g.
/// Georgian script) are dropped; slugs are always derived from the English
/// name.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_dash = true;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Combat Shirt"), "combat-shirt");
        assert_eq!(slugify("  Gen 3 / Ranger Green  "), "gen-3-ranger-green");
        assert_eq!(slugify("combat-shirt-2"), "combat-shirt-2");
        assert_eq!(slugify(""), "");
    }
}
