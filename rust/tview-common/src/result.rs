pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[cold]
pub fn out_of_bounds<T>(index: usize, len: usize) -> Result<T> {
    Err(crate::error::ErrorKind::OutOfBounds { index, len }.into())
}

#[cold]
pub fn invalid_operation<T>(name: &str) -> Result<T> {
    Err(crate::error::ErrorKind::InvalidOperation {
        name: name.to_string(),
    }
    .into())
}
