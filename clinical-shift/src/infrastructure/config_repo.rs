use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::models::ShiftConfig;
use crate::error::ConfigError;

/// 設定ファイルのパスを指定する環境変数
pub const ENV_CONFIG_PATH: &str = "CLINICAL_SHIFT_CONFIG";

/// 臨床単位・班別の設定を保持する
///
/// 保持している設定は常に検証済み
#[derive(Debug, Clone)]
pub struct ConfigRepository {
    config: ShiftConfig,
}

impl ConfigRepository {
    pub fn from_config(config: ShiftConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ShiftConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let repo = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            units = repo.config.clinical_units.len(),
            shifts = repo.config.shifts.len(),
            "loaded shift config"
        );
        Ok(repo)
    }

    /// パスが指定されていれば読み込み、なければ組み込みの設定を使う
    pub fn load_or_reference(path: Option<&PathBuf>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("no config path given, using reference config");
                Self::reference()
            }
        }
    }

    /// 組み込みの設定 (ICU2: 白班・小夜班・大夜班 各 479 分)
    ///
    /// 並び順は E, D, N
    pub fn reference() -> Result<Self, ConfigError> {
        Self::from_json_str(REFERENCE_CONFIG)
    }

    pub fn config(&self) -> &ShiftConfig {
        &self.config
    }
}

// 組み込みの設定は config/icu2.json の内容そのもの
const REFERENCE_CONFIG: &str = include_str!("../../config/icu2.json");
