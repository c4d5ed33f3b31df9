use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_format(element: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidFormat {
                element: element.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_operation(name: impl Into<String>) -> Error {
        Error(ErrorKind::InvalidOperation { name: name.into() }.into())
    }

    pub fn out_of_bounds(index: usize, len: usize) -> Error {
        Error(ErrorKind::OutOfBounds { index, len }.into())
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid operation {name}")]
    InvalidOperation { name: String },

    #[error("index {index} is out of bounds for a sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("invalid input for '{element}': {message}")]
    InvalidFormat { element: String, message: String },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = Error::out_of_bounds(7, 3);
        assert!(matches!(
            err.kind(),
            ErrorKind::OutOfBounds { index: 7, len: 3 }
        ));
        assert_eq!(
            err.to_string(),
            "index 7 is out of bounds for a sequence of length 3"
        );
    }

    #[test]
    fn test_io_conversion() {
        let source = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: Error = source.into();
        match err.into_kind() {
            ErrorKind::Io { context, source } => {
                assert!(context.is_empty());
                assert_eq!(source.kind(), std::io::ErrorKind::UnexpectedEof);
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn test_result_helpers() {
        let res: crate::Result<u8> = crate::result::invalid_operation("get on an empty box");
        assert_eq!(
            res.unwrap_err().to_string(),
            "invalid operation get on an empty box"
        );
        let res: crate::Result<()> = crate::result::out_of_bounds(1, 0);
        assert!(res.is_err());
    }
}
