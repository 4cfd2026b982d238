use crate::commands::common::{open_session, parse_category, quote_to_item, SessionOptions};
use crate::error::CliError;
use crate::render::Screen;

pub async fn run_random(
    category: Option<&str>,
    as_json: bool,
    options: &SessionOptions,
) -> Result<(), CliError> {
    let filter = parse_category(category)?;
    let mut session = open_session(options).await?;
    session.set_category(filter);
    session.select_random_quote();

    if as_json {
        let item = quote_to_item(session.current_quote(), session.is_current_favorite());
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        println!("{}", Screen::from_controller(&session));
    }

    Ok(())
}
