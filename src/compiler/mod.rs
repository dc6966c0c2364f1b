// 编译后模式模型
pub mod compiled;

pub use compiled::{CompiledLibrary, CompiledPattern};
