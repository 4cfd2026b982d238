use dailyquote_core::{Catalog, CategoryFilter};

use crate::commands::common::CategoryItem;
use crate::error::CliError;

pub fn category_items(catalog: &Catalog) -> Vec<CategoryItem> {
    CategoryFilter::selectors()
        .into_iter()
        .map(|filter| CategoryItem {
            label: filter.label().to_string(),
            slug: match filter {
                CategoryFilter::All => dailyquote_core::models::ALL_SLUG.to_string(),
                CategoryFilter::Only(category) => category.slug().to_string(),
            },
            quotes: catalog.filtered(filter).len(),
        })
        .collect()
}

pub fn run_categories(as_json: bool) -> Result<(), CliError> {
    let items = category_items(&Catalog::bundled());

    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for item in items {
            println!("{:<4}  {:<12}  {}", item.label, item.slug, item.quotes);
        }
    }

    Ok(())
}
