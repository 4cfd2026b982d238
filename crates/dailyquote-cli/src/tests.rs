use std::io::Cursor;
use std::path::PathBuf;

use dailyquote_core::share::{ShareRequest, ShareTarget};
use dailyquote_core::{Catalog, Category, CategoryFilter, Notice, QuoteId, Stats};
use pretty_assertions::assert_eq;

use crate::cli::CompletionShell;
use crate::commands::categories::category_items;
use crate::commands::common::{
    focus_optional_quote, open_session, parse_category, parse_quote_id, resolve_store_location,
    resolve_store_path, SessionOptions, StoreLocation,
};
use crate::commands::completions::render_completions;
use crate::commands::config::apply_config_updates;
use crate::commands::interactive::{drive_session, parse_action, Action};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::render::{
    format_quote_lines, quote_preview, render_category_selector, render_notice,
    render_share_card, Screen,
};
use crate::share::{CommandShare, ShareBackend, StdoutShare};

fn ephemeral(seed: u64) -> SessionOptions {
    SessionOptions {
        store: StoreLocation::Ephemeral,
        seed: Some(seed),
    }
}

fn id(value: u32) -> QuoteId {
    QuoteId::new(value).unwrap()
}

#[test]
fn parse_category_accepts_labels_slugs_and_all() {
    assert_eq!(parse_category(None).unwrap(), CategoryFilter::All);
    assert_eq!(parse_category(Some("全部")).unwrap(), CategoryFilter::All);
    assert_eq!(
        parse_category(Some("勵志")).unwrap(),
        CategoryFilter::Only(Category::Inspiration)
    );
    assert_eq!(
        parse_category(Some(" TIME ")).unwrap(),
        CategoryFilter::Only(Category::Time)
    );
}

#[test]
fn parse_category_rejects_unknown_names() {
    assert!(matches!(
        parse_category(Some("poetry")),
        Err(CliError::UnknownCategory(name)) if name == "poetry"
    ));
}

#[test]
fn parse_quote_id_rejects_non_positive_and_garbage() {
    assert_eq!(parse_quote_id(" 7 ").unwrap(), id(7));
    assert!(matches!(parse_quote_id("0"), Err(CliError::QuoteNotFound(_))));
    assert!(matches!(parse_quote_id("abc"), Err(CliError::QuoteNotFound(_))));
}

#[test]
fn store_location_prefers_ephemeral_then_flag() {
    let config = CliConfig {
        store_path: Some("/from/config.db".to_string()),
        ..CliConfig::default()
    };

    assert_eq!(
        resolve_store_location(Some(PathBuf::from("/flag.db")), true, &config).unwrap(),
        StoreLocation::Ephemeral
    );
    assert_eq!(
        resolve_store_path(Some(PathBuf::from("/flag.db")), &config).unwrap(),
        PathBuf::from("/flag.db")
    );
}

#[tokio::test]
async fn ephemeral_session_starts_on_a_catalog_quote() {
    let session = open_session(&ephemeral(3)).await.unwrap();
    assert!(session.catalog().contains(session.current_quote().id));
    assert_eq!(
        session.stats(),
        Stats {
            total_quotes: 10,
            favorites: 0
        }
    );
}

#[tokio::test]
async fn file_store_keeps_favorites_and_daily_quote_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let options = SessionOptions {
        store: StoreLocation::File(dir.path().join("data").join("dailyquote.db")),
        seed: Some(1),
    };

    let daily = {
        let mut session = open_session(&options).await.unwrap();
        let daily = session.current_quote().id;
        focus_optional_quote(&mut session, Some("4")).unwrap();
        assert_eq!(session.toggle_current_favorite().await, Notice::FavoriteAdded);
        daily
    };

    let reopened = SessionOptions {
        seed: Some(99),
        ..options
    };
    let session = open_session(&reopened).await.unwrap();
    assert!(session.favorites().is_favorite(id(4)));
    assert_eq!(session.current_quote().id, daily);
}

#[tokio::test]
async fn focus_optional_quote_reports_unknown_ids() {
    let mut session = open_session(&ephemeral(0)).await.unwrap();
    let today = session.current_quote().id;

    focus_optional_quote(&mut session, None).unwrap();
    assert_eq!(session.current_quote().id, today);

    assert!(matches!(
        focus_optional_quote(&mut session, Some("11")),
        Err(CliError::QuoteNotFound(value)) if value == "11"
    ));
    assert_eq!(session.current_quote().id, today);
}

#[test]
fn parse_action_maps_letters_and_words() {
    assert_eq!(parse_action("r"), Action::Random);
    assert_eq!(parse_action(" favorite "), Action::Favorite);
    assert_eq!(parse_action("s"), Action::Share);
    assert_eq!(parse_action("c 勵志"), Action::Category("勵志".to_string()));
    assert_eq!(parse_action("c"), Action::Category("all".to_string()));
    assert_eq!(parse_action(""), Action::Help);
    assert_eq!(parse_action("q"), Action::Quit);
    assert_eq!(parse_action("zz top"), Action::Unknown("zz".to_string()));
}

#[tokio::test]
async fn interactive_session_applies_actions_until_quit() {
    let mut session = open_session(&ephemeral(12)).await.unwrap();
    let input = Cursor::new("f\nc 勵志\nr\nc nope\nx\nq\nf\n");
    let mut output = Vec::new();

    drive_session(&mut session, &StdoutShare, input, &mut output)
        .await
        .unwrap();

    let rendered = String::from_utf8(output).unwrap();
    assert!(rendered.contains("提示: 已加入收藏"));
    assert!(rendered.contains("[勵志]"));
    assert!(rendered.contains("unknown category 'nope'"));
    assert!(rendered.contains("Unknown action 'x'"));

    assert_eq!(session.stats().favorites, 1);
    assert_eq!(
        session.category(),
        CategoryFilter::Only(Category::Inspiration)
    );
    let current = session.current_quote().id;
    assert!(current == id(1) || current == id(3));
}

#[tokio::test]
async fn screen_shows_header_actions_and_counters() {
    let mut session = open_session(&ephemeral(5)).await.unwrap();
    focus_optional_quote(&mut session, Some("9")).unwrap();

    let before = Screen::from_controller(&session).to_string();
    assert!(before.starts_with("每日金句\n每天一句話，改變你的心境\n"));
    assert!(before.contains("機會只偏愛有準備的頭腦。\n— 路易·巴斯德\n#機會"));
    assert!(before.contains("🎲 隨機金句   🤍 收藏   📤 分享"));
    assert!(before.ends_with("📚 總共 10 句金句   💝 收藏了 0 句"));

    session.toggle_current_favorite().await;
    let after = Screen::from_controller(&session).to_string();
    assert!(after.contains("💖 已收藏"));
    assert!(after.ends_with("💝 收藏了 1 句"));
}

#[test]
fn category_selector_brackets_the_selection() {
    let rendered = render_category_selector(CategoryFilter::Only(Category::Dream));
    assert!(rendered.starts_with(" 全部 "));
    assert!(rendered.contains("[夢想]"));
    assert_eq!(rendered.matches('[').count(), 1);
}

#[test]
fn notices_render_title_and_message() {
    assert_eq!(render_notice(Notice::FavoriteRemoved), "提示: 已從收藏中移除");
    assert_eq!(render_notice(Notice::ShareFailed), "錯誤: 分享失敗，請稍後再試");
}

#[test]
fn share_card_frames_the_message() {
    let catalog = Catalog::bundled();
    let request = ShareRequest::for_quote(catalog.get(id(3)).unwrap());
    assert_eq!(
        render_share_card(&request),
        "┌─ 分享金句\n│ 今天是你餘生的第一天。\n│\n│ — 無名氏\n└─"
    );
}

#[test]
fn quote_lines_mark_favorites() {
    let catalog = Catalog::bundled();
    let quotes = catalog.filtered(CategoryFilter::Only(Category::Inspiration));
    let lines = format_quote_lines(&quotes, |quote_id| quote_id == id(3));

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("  1   勵志"));
    assert!(lines[1].starts_with("  3 * 勵志  今天是你餘生的第一天。  — 無名氏"));
}

#[test]
fn quote_preview_truncates_with_ellipsis() {
    assert_eq!(quote_preview("時間是最公正的裁判", 6), "時間是...");
    assert_eq!(quote_preview("  a   b ", 10), "a b");
}

#[test]
fn category_items_list_all_first_with_counts() {
    let items = category_items(&Catalog::bundled());
    assert_eq!(items.len(), 10);
    assert_eq!(
        (items[0].label.as_str(), items[0].slug.as_str(), items[0].quotes),
        ("全部", "all", 10)
    );
    assert_eq!(
        (items[1].label.as_str(), items[1].slug.as_str(), items[1].quotes),
        ("勵志", "inspiration", 2)
    );
}

#[test]
fn apply_config_updates_sets_and_clears_fields() {
    let mut config = CliConfig::default();
    apply_config_updates(
        &mut config,
        Some(PathBuf::from("/data/quotes.db")),
        Some(" wl-copy ".to_string()),
        false,
    )
    .unwrap();
    assert_eq!(config.store_path.as_deref(), Some("/data/quotes.db"));
    assert_eq!(config.share_command.as_deref(), Some("wl-copy"));

    apply_config_updates(&mut config, None, None, true).unwrap();
    assert_eq!(config.share_command, None);
    assert_eq!(config.store_path.as_deref(), Some("/data/quotes.db"));

    assert!(matches!(
        apply_config_updates(&mut config, None, Some("  ".to_string()), false),
        Err(CliError::Config(_))
    ));
}

#[test]
fn share_backend_defaults_to_stdout() {
    assert_eq!(ShareBackend::from_command(None).describe(), "stdout");
    assert_eq!(
        ShareBackend::from_command(Some("pbcopy".to_string())).describe(),
        "pbcopy"
    );
}

#[tokio::test]
async fn missing_share_program_is_unavailable() {
    let target = CommandShare::new("dailyquote-no-such-share-program --flag");
    assert!(!target.is_available().await);
    assert!(!CommandShare::new("   ").is_available().await);
}

#[cfg(unix)]
#[tokio::test]
async fn command_share_pipes_message_and_reports_failures() {
    assert!(crate::share::find_program("cat").is_some());

    let request = ShareRequest::for_quote(Catalog::bundled().first());
    let cat = CommandShare::new("cat");
    assert!(cat.is_available().await);
    assert!(cat.share(&request).await.is_ok());

    let failing = CommandShare::new("false");
    assert!(failing.is_available().await);
    assert!(failing.share(&request).await.is_err());
}

#[test]
fn bash_completions_reference_binary_name() {
    let script = String::from_utf8(render_completions(CompletionShell::Bash)).unwrap();
    assert!(script.contains("_dailyquote()"));
    assert!(script.contains("complete -F _dailyquote"));
}
