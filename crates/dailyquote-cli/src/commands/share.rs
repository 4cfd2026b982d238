use crate::commands::common::{focus_optional_quote, open_session, SessionOptions};
use crate::error::CliError;
use crate::render::render_notice;
use crate::share::ShareBackend;

pub async fn run_share(
    id: Option<&str>,
    target: &ShareBackend,
    options: &SessionOptions,
) -> Result<(), CliError> {
    let mut session = open_session(options).await?;
    focus_optional_quote(&mut session, id)?;

    let notice = session.share_current_quote(target).await;
    if notice.is_error() {
        eprintln!("{}", render_notice(notice));
    } else {
        println!("{}", render_notice(notice));
    }
    Ok(())
}
