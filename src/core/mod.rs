// 模式定义模型
pub mod pattern;
// 模式库（有序集合+类别唯一性约束）
pub mod library;
// 内置标准模式库
#[cfg(feature = "builtin-patterns")]
pub mod builtin;

pub use library::PatternLibrary;
pub use pattern::PatternDef;

#[cfg(feature = "builtin-patterns")]
pub use builtin::builtin_library;
