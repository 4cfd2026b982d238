use crate::commands::common::{open_session, SessionOptions};
use crate::error::CliError;

pub async fn run_stats(as_json: bool, options: &SessionOptions) -> Result<(), CliError> {
    let session = open_session(options).await?;
    let stats = session.stats();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!(
            "📚 總共 {} 句金句   💝 收藏了 {} 句",
            stats.total_quotes, stats.favorites
        );
    }

    Ok(())
}
