use crate::commands::common::{focus_optional_quote, open_session, SessionOptions};
use crate::error::CliError;
use crate::render::render_notice;

pub async fn run_favorite(id: Option<&str>, options: &SessionOptions) -> Result<(), CliError> {
    let mut session = open_session(options).await?;
    focus_optional_quote(&mut session, id)?;

    let notice = session.toggle_current_favorite().await;
    println!("{}", render_notice(notice));
    println!(
        "{}  {}",
        session.current_quote().id,
        session.current_quote().text
    );
    Ok(())
}
