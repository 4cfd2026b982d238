use crate::commands::common::{open_session, quote_to_item, SessionOptions};
use crate::error::CliError;
use crate::render::Screen;

pub async fn run_today(as_json: bool, options: &SessionOptions) -> Result<(), CliError> {
    let session = open_session(options).await?;

    if as_json {
        let quote = session.current_quote();
        let item = quote_to_item(quote, session.is_current_favorite());
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        println!("{}", Screen::from_controller(&session));
    }

    Ok(())
}
