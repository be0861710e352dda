/// 构造带有调用位置的 [`Error`]。
#[macro_export]
macro_rules! err_new {
    ($kind:expr, $message:expr) => {
        $crate::error::Error::new(file!(), line!(), column!(), $kind, $message)
    };
}

#[macro_export]
macro_rules! err_new_io {
    ($err:expr) => {
        $crate::err_new!($crate::error::Kind::IoError($err.kind()), &$err.to_string())
    };
}

#[macro_export]
macro_rules! err_new_image {
    ($err:expr) => {
        $crate::err_new!($crate::error::Kind::ImageError, &$err.to_string())
    };
}

#[macro_export]
macro_rules! err_new_json {
    ($err:expr) => {
        $crate::err_new!($crate::error::Kind::JsonError, &$err.to_string())
    };
}

pub struct Error {
    location: Option<String>,
    kind: Kind,
    message: String,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    #[must_use]
    pub fn new(file: &str, line: u32, column: u32, kind: Kind, message: &str) -> Self {
        Self {
            location: Some(format!("{file}:{line}:{column}")),
            kind,
            message: message.to_string(),
        }
    }

    fn bare(kind: Kind, message: String) -> Self {
        Self {
            location: None,
            kind,
            message,
        }
    }

    /// 错误类别，调用方据此区分"没有像素缓冲"与"画笔参数非法"等情况。
    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut f = f.debug_struct("Error");
        if let Some(ref location) = self.location {
            f.field("location", location);
        }
        f.field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.location {
            Some(ref location) => write!(f, "{:?}: {} ({location})", self.kind, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::bare(Kind::IoError(value.kind()), value.to_string())
    }
}

impl From<std::num::TryFromIntError> for Error {
    fn from(value: std::num::TryFromIntError) -> Self {
        Self::bare(Kind::TryFromIntError, value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::bare(Kind::JsonError, value.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(value: image::ImageError) -> Self {
        Self::bare(Kind::ImageError, value.to_string())
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::bare(Kind::Other, value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    IoError(std::io::ErrorKind),
    ImageError,
    JsonError,
    /// 画布没有挂载像素缓冲
    MissingPixels,
    /// 画笔尺寸必须为奇数
    InvalidBrushSize,
    /// 缓冲长度与 width * height * 3 不符
    BufferSizeMismatch,
    TryFromIntError,
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_err_new_records_location() {
        let err = err_new!(Kind::MissingPixels, "no pixels");
        assert_eq!(err.kind(), &Kind::MissingPixels);
        assert_eq!(err.message(), "no pixels");
        assert!(err.location().is_some_and(|l| l.contains("error.rs")));
        assert!(err.to_string().starts_with("MissingPixels: no pixels ("));
    }

    #[test]
    fn test_from_str_has_no_location() {
        let err: Error = "plain".into();
        assert_eq!(err.kind(), &Kind::Other);
        assert!(err.location().is_none());
        assert_eq!(err.to_string(), "Other: plain");
    }

    #[test]
    fn test_io_and_json_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = err_new_io!(io);
        assert_eq!(err.kind(), &Kind::IoError(std::io::ErrorKind::NotFound));

        let json = serde_json::from_str::<u32>("x").unwrap_err();
        let err: Error = json.into();
        assert_eq!(err.kind(), &Kind::JsonError);
    }

    #[test]
    fn test_try_from_int() {
        fn narrow(v: i64) -> Result<i32> {
            Ok(i32::try_from(v)?)
        }
        assert_eq!(narrow(7).unwrap(), 7);
        assert_eq!(narrow(i64::MAX).unwrap_err().kind(), &Kind::TryFromIntError);
    }
}
