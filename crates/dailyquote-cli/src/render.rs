//! Terminal rendering of the quote screen, notices, and quote listings.

use std::fmt;

use dailyquote_core::daily::Clock;
use dailyquote_core::share::ShareRequest;
use dailyquote_core::storage::KeyValueStore;
use dailyquote_core::{CategoryFilter, Notice, Quote, QuoteController, QuoteId, Stats};
use rand::Rng;

pub const TITLE: &str = "每日金句";
pub const SUBTITLE: &str = "每天一句話，改變你的心境";
pub const RANDOM_ACTION: &str = "🎲 隨機金句";
pub const FAVORITE_ACTION: &str = "🤍 收藏";
pub const FAVORITED_ACTION: &str = "💖 已收藏";
pub const SHARE_ACTION: &str = "📤 分享";

/// Everything the single quote screen shows
#[derive(Debug, Clone, Copy)]
pub struct Screen<'a> {
    pub quote: &'a Quote,
    pub category: CategoryFilter,
    pub is_favorite: bool,
    pub stats: Stats,
}

impl<'a> Screen<'a> {
    pub fn from_controller<S, C, R>(controller: &'a QuoteController<S, C, R>) -> Self
    where
        S: KeyValueStore,
        C: Clock,
        R: Rng,
    {
        Self {
            quote: controller.current_quote(),
            category: controller.category(),
            is_favorite: controller.is_current_favorite(),
            stats: controller.stats(),
        }
    }
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{SUBTITLE}")?;
        writeln!(f)?;
        writeln!(f, "{}", render_category_selector(self.category))?;
        writeln!(f)?;
        writeln!(f, "{}", self.quote.text)?;
        writeln!(f, "— {}", self.quote.author)?;
        writeln!(f, "#{}", self.quote.category.label())?;
        writeln!(f)?;
        let favorite = if self.is_favorite {
            FAVORITED_ACTION
        } else {
            FAVORITE_ACTION
        };
        writeln!(f, "{RANDOM_ACTION}   {favorite}   {SHARE_ACTION}")?;
        writeln!(f)?;
        write!(
            f,
            "📚 總共 {} 句金句   💝 收藏了 {} 句",
            self.stats.total_quotes, self.stats.favorites
        )
    }
}

/// Category labels in selector order, the selected one in brackets
pub fn render_category_selector(selected: CategoryFilter) -> String {
    CategoryFilter::selectors()
        .into_iter()
        .map(|filter| {
            if filter == selected {
                format!("[{}]", filter.label())
            } else {
                format!(" {} ", filter.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_notice(notice: Notice) -> String {
    format!("{}: {}", notice.title(), notice.message())
}

pub fn render_share_card(request: &ShareRequest) -> String {
    let mut card = format!("┌─ {}\n", request.title);
    for line in request.message.lines() {
        if line.is_empty() {
            card.push_str("│\n");
        } else {
            card.push_str("│ ");
            card.push_str(line);
            card.push('\n');
        }
    }
    card.push('└');
    card.push('─');
    card
}

pub fn format_quote_lines(quotes: &[&Quote], is_favorite: impl Fn(QuoteId) -> bool) -> Vec<String> {
    quotes
        .iter()
        .map(|quote| {
            let marker = if is_favorite(quote.id) { '*' } else { ' ' };
            format!(
                "{:>3} {marker} {}  {}  — {}",
                quote.id.get(),
                quote.category.label(),
                quote_preview(&quote.text, 40),
                quote.author
            )
        })
        .collect()
}

pub fn quote_preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}
