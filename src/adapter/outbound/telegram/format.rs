//! Message formatting for Telegram notices.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use url::Url;

use crate::domain::{TokenQuote, TrackedTarget};
use crate::port::Notice;

const BILLION: Decimal = dec!(1000000000);
const MILLION: Decimal = dec!(1000000);
const THOUSAND: Decimal = dec!(1000);

/// A notice ready to hand to the Bot API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNotice {
    pub text: String,
    /// Whether `text` is `MarkdownV2` (otherwise plain text).
    pub markdown: bool,
}

/// Render a notice for Telegram.
pub fn format_notice(notice: &Notice, chart_base_url: &str) -> RenderedNotice {
    match notice {
        Notice::Quote { target, quote } => RenderedNotice {
            text: format_quote_message(target, quote, chart_base_url),
            markdown: true,
        },
        Notice::NotFound { target } => RenderedNotice {
            text: format!(
                "❓ Could not find a price for {} on {}. Check the network and address, or /stop.",
                target.address(),
                target.network()
            ),
            markdown: false,
        },
        Notice::LookupFailed { target, reason } => RenderedNotice {
            text: format!(
                "⚠️ Error fetching price for {} on {}: {}",
                target.address(),
                target.network(),
                truncate(reason, 120)
            ),
            markdown: false,
        },
    }
}

/// Format a quote as a `MarkdownV2` message.
pub fn format_quote_message(target: &TrackedTarget, quote: &TokenQuote, chart_base_url: &str) -> String {
    let mut msg = format!(
        "*{}*\n\
        💵 *Price: ${} {}*\n\
        🚀 *FDV: {}*\n\
        🌊 *Vol 5m: {}*\n\
        \n\
        ✉️ *Contract:* `{}`\n\
        🌐 Network: {}\n\
        ⏰ Updated {} UTC\n",
        escape_markdown(&truncate(&quote.display_name(), 60)),
        escape_markdown(&format_price(quote.price_usd)),
        escape_markdown(&format_change(quote.price_change_5m_pct)),
        escape_markdown(&format_usd_compact(quote.fdv_usd)),
        escape_markdown(&format_usd_compact(quote.volume_5m_usd)),
        escape_code(target.address()),
        escape_markdown(target.network()),
        escape_markdown(&quote.observed_at.format("%Y-%m-%d %H:%M:%S").to_string()),
    );

    if let Some(url) = chart_url(chart_base_url, target) {
        msg.push_str(&format!("\n📈 [View Charts]({})", escape_link_url(&url)));
    }

    msg
}

/// Chart page for a target: `{base}/{network}/pools/{address}`.
pub fn chart_url(base: &str, target: &TrackedTarget) -> Option<String> {
    let mut url = Url::parse(base).ok()?;
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend([target.network(), "pools", target.address()]);
    Some(url.into())
}

/// Price with precision scaled to its magnitude.
pub fn format_price(price: Decimal) -> String {
    if price < dec!(0.000001) {
        fixed(price, 9)
    } else if price < dec!(0.001) {
        fixed(price, 6)
    } else {
        fixed(price, 4)
    }
}

/// Dollar amount with `K`/`M`/`B` suffix, or `n/a` when unknown.
pub fn format_usd_compact(value: Option<Decimal>) -> String {
    match value {
        Some(value) => format!("${}", format_compact(value)),
        None => "n/a".to_string(),
    }
}

/// Large number with one decimal and a `K`/`M`/`B` suffix.
pub fn format_compact(value: Decimal) -> String {
    if value >= BILLION {
        format!("{}B", fixed(value / BILLION, 1))
    } else if value >= MILLION {
        format!("{}M", fixed(value / MILLION, 1))
    } else if value >= THOUSAND {
        format!("{}K", fixed(value / THOUSAND, 1))
    } else {
        fixed(value, 1)
    }
}

/// Signed percentage change; zero or unknown renders as `0%`.
pub fn format_change(change: Option<Decimal>) -> String {
    match change {
        Some(change) if change > Decimal::ZERO => format!("+{}%", fixed(change, 2)),
        Some(change) if change < Decimal::ZERO => format!("{}%", fixed(change, 2)),
        _ => "0%".to_string(),
    }
}

/// Round half away from zero, then pad to exactly `dp` decimals.
fn fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}

/// Truncate a string with ellipsis (Unicode-safe).
pub fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    escape_chars(
        text,
        &[
            '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.',
            '!', '\\',
        ],
    )
}

/// Escape text placed inside an inline code span.
pub fn escape_code(text: &str) -> String {
    escape_chars(text, &['`', '\\'])
}

/// Escape the URL part of an inline link.
pub fn escape_link_url(text: &str) -> String {
    escape_chars(text, &[')', '\\'])
}

fn escape_chars(text: &str, special: &[char]) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if special.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn quote() -> TokenQuote {
        TokenQuote {
            name: Some("Pepe".into()),
            symbol: Some("PEPE".into()),
            price_usd: dec!(0.00001234),
            price_change_5m_pct: Some(dec!(1.5)),
            fdv_usd: Some(dec!(5230000000)),
            volume_5m_usd: Some(dec!(15300)),
            observed_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap(),
        }
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("hello"), "hello");
        assert_eq!(escape_markdown("hello_world"), "hello\\_world");
        assert_eq!(escape_markdown("*bold*"), "\\*bold\\*");
        assert_eq!(escape_markdown("+1.50%"), "\\+1\\.50%");
    }

    #[test]
    fn test_escape_code_only_touches_backtick_and_backslash() {
        assert_eq!(escape_code("0xab_c.d"), "0xab_c.d");
        assert_eq!(escape_code("a`b\\c"), "a\\`b\\\\c");
    }

    #[test]
    fn test_truncate_unicode() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 5), "hello...");
        assert_eq!(truncate("日本語テスト", 3), "日本語...");
    }

    #[test]
    fn price_precision_follows_magnitude() {
        assert_eq!(format_price(dec!(0.0000001234)), "0.000000123");
        assert_eq!(format_price(dec!(0.00012345)), "0.000123");
        assert_eq!(format_price(dec!(3120.55)), "3120.5500");
    }

    #[test]
    fn compact_suffixes() {
        assert_eq!(format_compact(dec!(5230000000)), "5.2B");
        assert_eq!(format_compact(dec!(1500000)), "1.5M");
        assert_eq!(format_compact(dec!(15300)), "15.3K");
        assert_eq!(format_compact(dec!(999)), "999.0");
        assert_eq!(format_usd_compact(None), "n/a");
        assert_eq!(format_usd_compact(Some(dec!(2000))), "$2.0K");
    }

    #[test]
    fn change_has_sign() {
        assert_eq!(format_change(Some(dec!(1.5))), "+1.50%");
        assert_eq!(format_change(Some(dec!(-0.256))), "-0.26%");
        assert_eq!(format_change(Some(Decimal::ZERO)), "0%");
        assert_eq!(format_change(None), "0%");
    }

    #[test]
    fn chart_url_appends_pool_path() {
        let target = TrackedTarget::new("eth", "0xabc");
        assert_eq!(
            chart_url("https://www.geckoterminal.com", &target).as_deref(),
            Some("https://www.geckoterminal.com/eth/pools/0xabc")
        );
        assert_eq!(chart_url("not a url", &target), None);
    }

    #[test]
    fn quote_message_is_escaped_markdown() {
        let target = TrackedTarget::new("eth", "0xabc");
        let text = format_quote_message(&target, &quote(), "https://www.geckoterminal.com");

        assert!(text.starts_with("*Pepe \\(PEPE\\)*\n"));
        assert!(text.contains("💵 *Price: $0\\.000012 \\+1\\.50%*"));
        assert!(text.contains("🚀 *FDV: $5\\.2B*"));
        assert!(text.contains("🌊 *Vol 5m: $15\\.3K*"));
        assert!(text.contains("`0xabc`"));
        assert!(text.contains("Updated 2024\\-03\\-01 12:30:05 UTC"));
        assert!(text.contains("[View Charts](https://www.geckoterminal.com/eth/pools/0xabc)"));
    }

    #[test]
    fn failure_notices_are_plain_text() {
        let target = TrackedTarget::new("eth", "0xabc");

        let rendered = format_notice(&Notice::NotFound { target: target.clone() }, "https://x.test");
        assert!(!rendered.markdown);
        assert!(rendered.text.contains("0xabc on eth"));

        let rendered = format_notice(
            &Notice::LookupFailed {
                target,
                reason: "price API returned 429 Too Many Requests".into(),
            },
            "https://x.test",
        );
        assert!(!rendered.markdown);
        assert!(rendered.text.contains("429"));
    }
}
