//! 模式库与文本加载管理器
//! 负责从本地JSON文件加载自定义模式库，以及整文件读取待提取文本

use std::fs;
use std::path::Path;

use crate::core::PatternLibrary;
use crate::error::{RsextractError, RsxResult};

/// 模式库加载管理器
pub struct PatternLoader;

impl PatternLoader {
    /// 从本地JSON文件加载模式库
    /// 文件格式：[{"category": "...", "pattern": "..."}, ...]
    pub fn from_json_file(path: impl AsRef<Path>) -> RsxResult<PatternLibrary> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            RsextractError::LibraryLoadError(format!("read {} failed: {}", path.display(), e))
        })?;

        let library = PatternLibrary::from_json_str(&json)?;
        log::debug!(
            "Pattern library loaded: path={} patterns={}",
            path.display(),
            library.len()
        );
        Ok(library)
    }
}

/// 整文件读取待提取文本（提取核心对文本来源无感知，不限制大小）
pub fn read_text_file(path: impl AsRef<Path>) -> RsxResult<String> {
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_from_json_file_loads_library() {
        let path = env::temp_dir().join("rsextract_test_patterns.json");
        fs::write(
            &path,
            r#"[{"category": "digits", "pattern": "\\d+"}]"#,
        )
        .unwrap();

        let lib = PatternLoader::from_json_file(&path).unwrap();
        assert_eq!(lib.categories(), vec!["digits"]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_json_file_missing_file_is_load_error() {
        let err = PatternLoader::from_json_file("/nonexistent/patterns.json").unwrap_err();
        assert!(matches!(err, RsextractError::LibraryLoadError(_)));
    }

    #[test]
    fn test_read_text_file_roundtrip() {
        let path = env::temp_dir().join("rsextract_test_input.txt");
        fs::write(&path, "Call 123-456-7890").unwrap();

        assert_eq!(read_text_file(&path).unwrap(), "Call 123-456-7890");

        fs::remove_file(&path).ok();
    }
}
