// Sub-modules
pub mod download;
pub mod list;
pub mod operations;
pub mod upload;

// Re-exports
pub use download::*;
pub use list::*;
pub use operations::*;
pub use upload::*;

use serde::Deserialize;

use crate::error::ApiError;

pub const FILE_NAME_REQUIRED: &str = "File name is required";

/// `?file=<key>` query shared by download, view and delete / 文件名查询参数
#[derive(Debug, Deserialize)]
pub struct FileQuery {
    pub file: Option<String>,
}

impl FileQuery {
    /// The object key; missing or empty is a client error / 获取对象键
    pub fn key(&self) -> Result<&str, ApiError> {
        match self.file.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ApiError::BadRequest(FILE_NAME_REQUIRED)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_query_key() {
        let query = FileQuery { file: Some("a.txt".to_string()) };
        assert_eq!(query.key().unwrap(), "a.txt");

        let empty = FileQuery { file: Some(String::new()) };
        assert!(matches!(empty.key(), Err(ApiError::BadRequest(FILE_NAME_REQUIRED))));

        let missing = FileQuery { file: None };
        assert!(missing.key().is_err());
    }
}
