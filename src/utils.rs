// ログ・表示用ユーティリティ関数

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// ログ初期化
///
/// `RUST_LOG` が設定されていればそちらを優先し、なければ `default_level` を使う
pub fn init_logging(default_level: &str, format: LogFormat) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init()?,
    }

    Ok(())
}

/// API リクエスト/レスポンスのログ
///
/// クエリにAPIキーは含めない
pub fn log_api_request(url: &str, query: &[(&str, String)]) {
    debug!(
        url = %url,
        params = ?query,
        "📡 API request sent"
    );
}

pub fn log_api_response(endpoint: &str, status: u16, response_size: usize, duration_ms: u64) {
    debug!(
        endpoint = endpoint,
        status = status,
        response_size_bytes = response_size,
        duration_ms = duration_ms,
        "📨 API response received"
    );
}

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://|www\.)\S+").expect("URL regex must compile")
});

/// URL を空白に置き換える
pub fn strip_urls(text: &str) -> Cow<'_, str> {
    URL_REGEX.replace_all(text, " ")
}

/// 3桁区切りの数値表記
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }

    formatted
}

/// 文字数ベースで切り詰め（マルチバイト安全）
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}
