//! File name utility functions / 文件名工具函数

/// Last `/`-separated element of a client file name / 取客户端文件名的最后一段
///
/// Trailing slashes are ignored, a name of only slashes is `"/"`, and
/// backslashes are ordinary characters.
/// "dir/a.jpg" -> "a.jpg", "dir/" -> "dir", "C:\\a.jpg" -> "C:\\a.jpg"
pub fn base_file_name(name: &str) -> &str {
    let trimmed = name.trim_end_matches('/');
    if trimmed.is_empty() {
        return if name.is_empty() { name } else { "/" };
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Split file name into stem and extension (with leading dot) / 分离文件名和扩展名
/// "a.tar.gz" -> ("a.tar", ".gz"), "README" -> ("README", ""), ".env" -> ("", ".env")
pub fn split_ext(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) => name.split_at(pos),
        None => (name, ""),
    }
}

/// Generate timestamp-suffixed file name / 生成带时间戳的唯一文件名
/// Input: "photo.jpg" / 输入
/// Output: "photo_1697040000000000000.jpg" / 输出
pub fn generate_unique_file_name(original: &str) -> String {
    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default();
    unique_file_name_at(original, nanos)
}

fn unique_file_name_at(original: &str, nanos: i64) -> String {
    let (stem, ext) = split_ext(original);
    format!("{}_{}{}", stem, nanos, ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_file_name() {
        assert_eq!(base_file_name("a.txt"), "a.txt");
        assert_eq!(base_file_name("dir/sub/a.txt"), "a.txt");
        assert_eq!(base_file_name("C:\\Users\\me\\a.txt"), "C:\\Users\\me\\a.txt");
        assert_eq!(base_file_name("dir/"), "dir");
        assert_eq!(base_file_name("a//b//"), "b");
        assert_eq!(base_file_name("///"), "/");
        assert_eq!(base_file_name(""), "");
    }

    #[test]
    fn test_split_ext() {
        assert_eq!(split_ext("photo.jpg"), ("photo", ".jpg"));
        assert_eq!(split_ext("a.tar.gz"), ("a.tar", ".gz"));
        assert_eq!(split_ext("README"), ("README", ""));
        assert_eq!(split_ext(".env"), ("", ".env"));
    }

    #[test]
    fn test_unique_file_name_at() {
        assert_eq!(unique_file_name_at("photo.jpg", 42), "photo_42.jpg");
        assert_eq!(unique_file_name_at("README", 7), "README_7");
        assert_eq!(unique_file_name_at("a.tar.gz", 1), "a.tar_1.gz");
    }

    #[test]
    fn test_generate_unique_file_name_keeps_stem_and_ext() {
        let name = generate_unique_file_name("report.pdf");
        assert!(name.starts_with("report_"));
        assert!(name.ends_with(".pdf"));

        let stamp = &name["report_".len()..name.len() - ".pdf".len()];
        assert!(!stamp.is_empty());
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }
}
