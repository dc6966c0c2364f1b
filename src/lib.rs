//! rsextract - 高性能结构化数据提取库
//! 基于预编译正则模式库，对非结构化文本做单遍扫描，按类别聚合匹配子串

// 模式定义+模式库+内置标准模式
pub mod core;
// 模式编译（正则预编译与类别索引）
pub mod compiler;
// 提取器核心+提取结果+全局单例
pub mod extractor;
// 模式库/文本文件加载
pub mod loader;
// 错误定义
pub mod error;
// 通用工具模块
pub mod utils;

// 导出全局错误类型
pub use self::error::{RsxResult, RsextractError};

// 导出模式定义与模式库核心结构体
pub use crate::core::{PatternDef, PatternLibrary};

// 导出内置标准模式库 - 仅在开启builtin-patterns特性时编译
#[cfg(feature = "builtin-patterns")]
pub use crate::core::builtin_library;

// 导出编译产物
pub use crate::compiler::{CompiledLibrary, CompiledPattern};

// 导出提取模块核心接口（包含全局单例封装接口）
pub use crate::extractor::{
    CategoryMatches, DataExtractor, Extraction, init_global_extractor_with_patterns,
};
#[cfg(feature = "builtin-patterns")]
pub use crate::extractor::{global_extract, init_global_extractor};

// 导出加载工具核心能力
pub use crate::loader::{read_text_file, PatternLoader};
