//! Applications profile codec.
//!
//! One application per line: `domain|category|weight|endpoint`. The endpoint
//! is optional. Blank lines and lines starting with `#` are skipped.
//! Categories appear in the tree in first-seen order.
//!
//! ```
//! use trafficmix_weights::{parse_profile, render_profile};
//!
//! let text = "# web mix\nexample.com|web|600|https://example.com/\nsip.example|voice|400\n";
//! let tree = parse_profile(text).unwrap();
//! assert_eq!(tree.category_total("web"), Some(600));
//! assert_eq!(render_profile(&tree), "example.com|web|600|https://example.com/\nsip.example|voice|400\n");
//! ```

use std::collections::HashSet;

use trafficmix_core::constants::PROFILE_FIELD_SEPARATOR;
use trafficmix_core::errors::ProfileError;
use trafficmix_core::models::{Category, WeightItem, WeightTree};

/// Parse a profile into an unsettled tree. Use
/// [`WeightEngine::settle`](crate::WeightEngine::settle) to bring it to the
/// global total.
pub fn parse_profile(text: &str) -> Result<WeightTree, ProfileError> {
    let mut tree = WeightTree::default();
    let mut seen = HashSet::new();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(PROFILE_FIELD_SEPARATOR).map(str::trim).collect();
        if !(3..=4).contains(&fields.len()) {
            return Err(malformed(
                line_no,
                format!("expected 3 or 4 fields, found {}", fields.len()),
            ));
        }
        let (domain, category, weight) = (fields[0], fields[1], fields[2]);
        if domain.is_empty() {
            return Err(malformed(line_no, "empty domain".to_string()));
        }
        if category.is_empty() {
            return Err(malformed(line_no, "empty category".to_string()));
        }
        let weight: u64 = weight
            .parse()
            .map_err(|_| malformed(line_no, format!("invalid weight '{weight}'")))?;
        if !seen.insert(domain.to_string()) {
            return Err(ProfileError::DuplicateItem {
                id: domain.to_string(),
                line: line_no,
            });
        }

        let item = WeightItem::new(domain, weight)
            .with_endpoint(fields.get(3).copied().unwrap_or_default());
        match tree.categories.iter_mut().find(|c| c.name == category) {
            Some(existing) => existing.items.push(item),
            None => tree
                .categories
                .push(Category::with_items(category, vec![item])),
        }
    }

    Ok(tree)
}

/// Render a tree in profile format, category by category.
pub fn render_profile(tree: &WeightTree) -> String {
    let mut out = String::new();
    for category in &tree.categories {
        for item in &category.items {
            out.push_str(&item.id);
            out.push(PROFILE_FIELD_SEPARATOR);
            out.push_str(&category.name);
            out.push(PROFILE_FIELD_SEPARATOR);
            out.push_str(&item.weight.to_string());
            if !item.endpoint.is_empty() {
                out.push(PROFILE_FIELD_SEPARATOR);
                out.push_str(&item.endpoint);
            }
            out.push('\n');
        }
    }
    out
}

fn malformed(line: usize, reason: String) -> ProfileError {
    ProfileError::MalformedLine { line, reason }
}
