// ============================================================================
// Aurora - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 运行配置数据结构定义和操作
// 边界:
//   - ✅ 配置数据结构定义
//   - ✅ 环境变量读取
//   - ✅ 运行时参数合并
//   - ✅ 颜色模式解析与应用
//   - ❌ 不应包含配置文件解析
//   - ❌ 不应包含 CLI 参数处理
//   - ❌ 不应包含日志输出逻辑
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock, RwLock};

use crate::error::{AuroraError, Result};
use crate::utils::colors;

/// 全局配置管理器
static GLOBAL_CONFIG: OnceLock<Arc<RwLock<Config>>> = OnceLock::new();

/// 颜色模式环境变量
pub const ENV_COLOR: &str = "AURORA_COLOR";
/// 详细输出环境变量
pub const ENV_VERBOSE: &str = "AURORA_VERBOSE";

/// Aurora 运行配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 颜色模式
    #[serde(default)]
    pub color: ColorMode,
    /// 是否输出诊断日志
    #[serde(default)]
    pub verbose: bool,
}

/// CLI 运行时参数（用于覆盖环境配置）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub color: Option<ColorMode>,
}

/// 颜色模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// 根据终端自动判断
    #[default]
    Auto,
    /// 始终着色
    Always,
    /// 从不着色
    Never,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }

    /// 解析为最终是否着色
    ///
    /// `Auto` 仅在 stdout 为终端且未设置 `NO_COLOR` 时着色。
    pub fn resolve(&self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                atty::is(atty::Stream::Stdout) && std::env::var_os("NO_COLOR").is_none()
            }
        }
    }
}

impl FromStr for ColorMode {
    type Err = AuroraError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(AuroraError::InvalidColorMode(s.to_string())),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    /// 获取默认颜色模式
    fn default_color_mode() -> ColorMode {
        ColorMode::Auto
    }

    /// 获取默认是否详细输出
    fn default_verbose() -> bool {
        false
    }
}

impl ConfigDefaults for Config {}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: Config::default_color_mode(),
            verbose: Config::default_verbose(),
        }
    }
}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize() -> Result<()> {
        let config = Self::from_env()?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| AuroraError::Config("global config already initialized".to_string()))?;
        Ok(())
    }

    /// 从进程环境变量读取配置
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(color) = lookup(ENV_COLOR) {
            config.output.color = color.parse()?;
        }
        if let Some(verbose) = lookup(ENV_VERBOSE) {
            config.output.verbose = matches!(
                verbose.trim().to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        Ok(config)
    }

    /// 合并运行时参数到全局配置
    pub fn merge_runtime_args(args: RuntimeArgs) -> Result<()> {
        let global_config = Self::global()?;
        let mut config = global_config
            .write()
            .map_err(|_| AuroraError::Config("failed to acquire config write lock".to_string()))?;
        config.merge(args);
        Ok(())
    }

    /// 合并运行时参数
    pub fn merge(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(color) = args.color {
            self.output.color = color;
        }
    }

    /// 将颜色模式应用到全局颜色开关
    pub fn apply(&self) {
        let enabled = self.output.color.resolve();
        colors::set_enabled(enabled);
        tracing::debug!(mode = %self.output.color, enabled, "color output configured");
    }

    /// 获取全局配置快照
    pub fn current() -> Result<Self> {
        let global_config = Self::global()?;
        let config = global_config
            .read()
            .map_err(|_| AuroraError::Config("failed to acquire config read lock".to_string()))?;
        Ok(config.clone())
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        match Self::current() {
            Ok(config) => config.output.verbose,
            _ => Self::default_verbose(),
        }
    }

    /// 获取颜色模式（带默认值）
    pub fn get_color_mode() -> ColorMode {
        match Self::current() {
            Ok(config) => config.output.color,
            _ => Self::default_color_mode(),
        }
    }

    fn global() -> Result<&'static Arc<RwLock<Config>>> {
        GLOBAL_CONFIG
            .get()
            .ok_or_else(|| AuroraError::Config("global config not initialized".to_string()))
    }
}
