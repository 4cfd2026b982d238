use crate::commands::common::{open_session, session_quote_items, SessionOptions};
use crate::error::CliError;
use crate::render::format_quote_lines;

pub async fn run_favorites(as_json: bool, options: &SessionOptions) -> Result<(), CliError> {
    let session = open_session(options).await?;
    let quotes = session.favorite_quotes();

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&session_quote_items(&session, &quotes))?
        );
    } else if quotes.is_empty() {
        println!("No favorites yet. Run `dailyquote favorite` to add today's quote.");
    } else {
        for line in format_quote_lines(&quotes, |_| true) {
            println!("{line}");
        }
    }

    Ok(())
}
