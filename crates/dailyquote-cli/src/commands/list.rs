use crate::commands::common::{open_session, parse_category, session_quote_items, SessionOptions};
use crate::error::CliError;
use crate::render::format_quote_lines;

pub async fn run_list(
    category: Option<&str>,
    as_json: bool,
    options: &SessionOptions,
) -> Result<(), CliError> {
    let filter = parse_category(category)?;
    let session = open_session(options).await?;
    let quotes = session.catalog().filtered(filter);

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&session_quote_items(&session, &quotes))?
        );
    } else {
        let favorites = session.favorites();
        for line in format_quote_lines(&quotes, |id| favorites.is_favorite(id)) {
            println!("{line}");
        }
    }

    Ok(())
}
