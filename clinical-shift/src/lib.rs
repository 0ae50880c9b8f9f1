pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod application;

use application::time::{Clock, SystemClock};
use infrastructure::config_repo::ConfigRepository;

pub use domain::models::{ClinicalUnit, Shift, ShiftConfig};
pub use domain::shift_logic::resolve;
pub use domain::shift_model::{ResolutionResult, ResolvedShift};
pub use error::{ConfigError, ResolveError};

// 設定と時計を保持するコンテナ
// グローバルなシングルトンは使わず、呼び出し側が組み立てて渡す
pub struct AppServices {
    pub config: ConfigRepository,
    pub clock: Box<dyn Clock + Send + Sync>,
}

impl AppServices {
    pub fn new(config: ConfigRepository, clock: Box<dyn Clock + Send + Sync>) -> Self {
        Self { config, clock }
    }

    /// 実際の壁時計を使うサービス
    pub fn with_system_clock(config: ConfigRepository) -> Self {
        Self::new(config, Box::new(SystemClock))
    }
}
