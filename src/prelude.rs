use crate::{err_new_io, err_new_json, error::Result};
use serde::de::DeserializeOwned;
use std::{fmt::Debug, fs::File, io::BufReader, path::Path};

pub fn debug_print<T: Debug>(s: T) {
    #[cfg(debug_assertions)]
    dbg!(s);
}

/// 读取 JSON 文件并反序列化为 `T`。
///
/// # Errors
/// - 文件无法打开时返回 `Kind::IoError`。
/// - 内容不是合法的 `T` 时返回 `Kind::JsonError`。
///
pub fn read_json<T, P>(file_path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::open(file_path.as_ref()).map_err(|e| err_new_io!(e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| err_new_json!(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{command::Script, error::Kind};

    #[test]
    fn test_read_json_missing_file() {
        let err = read_json::<Script, _>("./no/such/script.json").unwrap_err();
        assert_eq!(err.kind(), &Kind::IoError(std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_read_json_script() {
        let path = std::env::temp_dir().join(format!("bmp_brush_{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"width": 3, "height": 3, "commands": [{"op": "dot", "row": 1, "col": 1}]}"#,
        )
        .unwrap();
        let script: Script = read_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!((script.width, script.height), (3, 3));
        assert_eq!(script.commands.len(), 1);
    }

    #[test]
    fn test_read_json_bad_content() {
        let path = std::env::temp_dir().join(format!("bmp_brush_bad_{}.json", std::process::id()));
        std::fs::write(&path, "{\"width\": \"wide\"}").unwrap();
        let err = read_json::<Script, _>(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert_eq!(err.kind(), &Kind::JsonError);
    }
}
