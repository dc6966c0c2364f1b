// 提取器核心
pub mod extractor;
// 全局提取器单例管理
pub mod global;
// 提取结果模型与报告输出
pub mod result;

pub use extractor::DataExtractor;
pub use global::init_global_extractor_with_patterns;
pub use result::{CategoryMatches, Extraction};

#[cfg(feature = "builtin-patterns")]
pub use global::{global_extract, init_global_extractor};
