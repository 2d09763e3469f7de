//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a003_system_entity--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the resource searchable: copy the id from the
//! DOM inspector and you land in `domain/a003_system_entity/`.

/// Table of records of one resource.
pub const PAGE_CAT_LIST: &str = "list";

/// Landing page with the resource cards.
pub const PAGE_CAT_HOME: &str = "home";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_HOME];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && ALL_CATEGORIES.contains(&parts[1])
}
