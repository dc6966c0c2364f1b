//! 全局错误类型定义
//! 配置类错误（模式编译失败/类别重复）在初始化阶段即失败，绝不降级为"无匹配"
use thiserror::Error;

use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum RsextractError {
    // ===================== 模式库相关错误 =====================
    /// 模式库加载失败（文件读取/格式错误）
    #[error("Pattern library load failed: {0}")]
    LibraryLoadError(String),

    /// 类别名称重复（模式库唯一性约束被破坏，不做静默覆盖）
    #[error("Duplicate pattern category: {0}")]
    DuplicateCategory(String),

    // ===================== 编译相关错误 =====================
    /// 正则编译失败（初始化阶段致命错误，带类别上下文）
    #[error("Pattern compilation failed: category={category}, error={reason}")]
    PatternCompileError { category: String, reason: String },

    // ===================== 提取器相关错误 =====================
    /// 提取器未初始化（调用前未完成全局初始化）
    #[error("Extractor not initialized: {0}")]
    ExtractorNotInitialized(String),

    /// 提取器初始化失败
    #[error("Extractor initialization failed: {0}")]
    ExtractorInitError(String),

    // ===================== 基础错误 =====================
    /// JSON解析失败
    #[error("JSON parse failed: {0}")]
    JsonError(#[from] SerdeJsonError),

    /// IO操作失败
    #[error("IO operation failed: {0}")]
    IoError(#[from] IoError),

    /// 无效输入
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type RsxResult<T> = Result<T, RsextractError>;
