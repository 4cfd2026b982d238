use std::io::{self, BufRead, Write};

use dailyquote_core::daily::Clock;
use dailyquote_core::share::ShareTarget;
use dailyquote_core::storage::KeyValueStore;
use dailyquote_core::{CategoryFilter, QuoteController};
use rand::Rng;

use crate::commands::common::{open_session, SessionOptions};
use crate::error::CliError;
use crate::render::{render_notice, Screen};
use crate::share::ShareBackend;

const HELP: &str = "r 隨機金句 · f 收藏 · s 分享 · c <類別> 切換類別 · q 離開";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Random,
    Favorite,
    Share,
    Category(String),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_action(line: &str) -> Action {
    let line = line.trim();
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(head, rest)| (head, rest.trim()));

    match head {
        "r" | "random" => Action::Random,
        "f" | "favorite" => Action::Favorite,
        "s" | "share" => Action::Share,
        "c" | "category" if rest.is_empty() => Action::Category("all".to_string()),
        "c" | "category" => Action::Category(rest.to_string()),
        "" | "h" | "help" | "?" => Action::Help,
        "q" | "quit" | "exit" => Action::Quit,
        other => Action::Unknown(other.to_string()),
    }
}

pub async fn run_interactive(
    target: &ShareBackend,
    options: &SessionOptions,
) -> Result<(), CliError> {
    let mut session = open_session(options).await?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    drive_session(&mut session, target, stdin.lock(), &mut stdout).await
}

/// Render the screen, then apply one action per input line until quit or EOF
pub async fn drive_session<S, C, R, T, In, Out>(
    session: &mut QuoteController<S, C, R>,
    target: &T,
    input: In,
    output: &mut Out,
) -> Result<(), CliError>
where
    S: KeyValueStore,
    C: Clock,
    R: Rng,
    T: ShareTarget,
    In: BufRead,
    Out: Write,
{
    writeln!(output, "{}", Screen::from_controller(session))?;
    writeln!(output, "{HELP}")?;

    for line in input.lines() {
        let notice = match parse_action(&line?) {
            Action::Random => {
                session.select_random_quote();
                None
            }
            Action::Favorite => Some(session.toggle_current_favorite().await),
            Action::Share => Some(session.share_current_quote(target).await),
            Action::Category(value) => match value.parse::<CategoryFilter>() {
                Ok(filter) => {
                    session.set_category(filter);
                    None
                }
                Err(error) => {
                    writeln!(output, "{error}")?;
                    continue;
                }
            },
            Action::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Action::Quit => break,
            Action::Unknown(command) => {
                writeln!(output, "Unknown action '{command}'. {HELP}")?;
                continue;
            }
        };

        writeln!(output)?;
        writeln!(output, "{}", Screen::from_controller(session))?;
        if let Some(notice) = notice {
            writeln!(output, "{}", render_notice(notice))?;
        }
        output.flush()?;
    }

    Ok(())
}
