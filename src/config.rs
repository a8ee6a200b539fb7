//! 設定管理モジュール
//!
//! `config.toml`（プラットフォームの設定ディレクトリ）→ 環境変数 → CLI引数の順に上書きする。
//! ネットワーク呼び出しの前に必ず `validate` を通す。

use crate::api::youtube::ApiKey;
use crate::errors::{CommentScopeError, CommentScopeResult};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// APIキーを渡す環境変数
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// 分析設定
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// YouTube Data API キー
    pub api_key: String,
    /// 取得するコメント数の上限（0 = すべて）
    pub max_comments: usize,
    /// 上位コメントの表示件数
    pub top_n: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            max_comments: 0,
            top_n: crate::analytics::DEFAULT_TOP_N,
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &ApiKey::new(self.api_key.clone()).masked())
            .field("max_comments", &self.max_comments)
            .field("top_n", &self.top_n)
            .finish()
    }
}

/// CLI などからの上書き値
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub max_comments: Option<usize>,
    pub top_n: Option<usize>,
}

impl AppConfig {
    /// 環境変数の値で APIキーを上書き（空文字は無視）
    pub fn with_env_api_key(mut self, value: Option<String>) -> Self {
        if let Some(key) = value.filter(|k| !k.trim().is_empty()) {
            debug!("🔑 API key taken from {}", API_KEY_ENV);
            self.api_key = key;
        }
        self
    }

    /// `YOUTUBE_API_KEY` を読む
    pub fn with_process_env(self) -> Self {
        self.with_env_api_key(std::env::var(API_KEY_ENV).ok())
    }

    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(key) = overrides.api_key.as_ref() {
            self.api_key = key.clone();
        }
        if let Some(max_comments) = overrides.max_comments {
            self.max_comments = max_comments;
        }
        if let Some(top_n) = overrides.top_n {
            self.top_n = top_n;
        }
        self
    }

    /// 設定値の検証
    pub fn validate(&self) -> CommentScopeResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(CommentScopeError::validation(format!(
                "API key is missing (set api_key in config.toml, {} or --api-key)",
                API_KEY_ENV
            )));
        }
        if self.top_n == 0 {
            return Err(CommentScopeError::validation("top_n must be greater than 0"));
        }
        Ok(())
    }

    pub fn api_key(&self) -> ApiKey {
        ApiKey::new(self.api_key.trim().to_string())
    }
}

/// 設定管理マネージャー
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// プラットフォーム既定の設定ファイルを使う
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: Self::get_config_path()?,
        })
    }

    /// 任意パスの設定ファイルを使う
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    fn get_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("dev", "sifyfy", "commentscope")
            .context("Failed to get project directories")?;

        let config_file = project_dirs.config_dir().join("config.toml");
        debug!("Config file path: {}", config_file.display());

        Ok(config_file)
    }

    /// 設定を読み込み（ファイルが無ければ既定値）
    pub fn load_config(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            info!(
                "Config file not found, using default settings: {}",
                self.config_path.display()
            );
            return Ok(AppConfig::default());
        }

        let config_content = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config: AppConfig = toml::from_str(&config_content).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        info!(
            "✅ Configuration loaded from: {}",
            self.config_path.display()
        );

        Ok(config)
    }

    /// 設定を保存
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let config_content =
            toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, config_content).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        info!("💾 Configuration saved to: {}", self.config_path.display());

        Ok(())
    }

    pub fn get_config_file_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config_exists(&self) -> bool {
        self.config_path.exists()
    }
}
