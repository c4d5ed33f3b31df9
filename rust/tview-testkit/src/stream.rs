//! A single-pass sequence of whitespace-separated values parsed from a reader.
//!
//! Starting a traversal reads the first value; advancing reads the next. Values
//! already passed cannot be revisited, so the sequence only supports mutable
//! traversal. A parse or read failure ends the sequence and is kept for
//! inspection through [`StreamSequence::error`].

use std::collections::VecDeque;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::BitOr;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use tview::capability::InputTag;
use tview::{Cursor, Sentinel, SequenceMut, TransformAdaptor, TransformView, View, Viewable};
use tview_common::Error;

pub struct StreamSequence<R, T> {
    reader: R,
    pending: VecDeque<String>,
    current: Option<T>,
    exhausted: bool,
    error: Option<Error>,
    values_read: usize,
}

impl<R, T> StreamSequence<R, T> {
    pub fn new(reader: R) -> Self {
        StreamSequence {
            reader,
            pending: VecDeque::new(),
            current: None,
            exhausted: false,
            error: None,
            values_read: 0,
        }
    }

    /// The failure that ended the sequence early, if any.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Number of values parsed so far.
    pub fn values_read(&self) -> usize {
        self.values_read
    }

    fn fail(&mut self, error: Error) {
        self.exhausted = true;
        self.pending.clear();
        self.error = Some(error);
    }
}

impl<T> StreamSequence<std::io::Cursor<Vec<u8>>, T> {
    pub fn from_text(text: &str) -> Self {
        StreamSequence::new(std::io::Cursor::new(text.as_bytes().to_vec()))
    }
}

impl<T> StreamSequence<BufReader<File>, T> {
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("opening stream {}", path.display()))?;
        Ok(StreamSequence::new(BufReader::new(file)))
    }
}

impl<R, T> StreamSequence<R, T>
where
    R: BufRead,
    T: FromStr,
    T::Err: fmt::Display,
{
    fn read_next(&mut self) {
        self.current = None;
        if self.exhausted {
            return;
        }
        loop {
            if let Some(token) = self.pending.pop_front() {
                match token.parse::<T>() {
                    Ok(value) => {
                        self.current = Some(value);
                        self.values_read += 1;
                    }
                    Err(e) => {
                        let message = e.to_string();
                        self.fail(Error::invalid_format(token, message));
                    }
                }
                return;
            }
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    self.exhausted = true;
                    return;
                }
                Ok(_) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
                Err(e) => {
                    self.fail(Error::io("reading stream", e));
                    return;
                }
            }
        }
    }
}

/// The only cursor of a [`StreamSequence`] traversal.
pub struct StreamCursor<'s, R, T> {
    stream: &'s mut StreamSequence<R, T>,
}

impl<R, T: fmt::Debug> fmt::Debug for StreamCursor<'_, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamCursor")
            .field("current", &self.stream.current)
            .finish()
    }
}

impl<R, T> Cursor for StreamCursor<'_, R, T>
where
    R: BufRead,
    T: FromStr + Clone,
    T::Err: fmt::Display,
{
    type Tag = InputTag;
    type Reference = T;

    fn read(&self) -> T {
        self.stream
            .current
            .clone()
            .expect("StreamCursor::read: the stream is exhausted")
    }

    fn advance(&mut self) {
        self.stream.read_next();
    }
}

/// End of a [`StreamSequence`]: reached once no further value can be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamEnd;

impl<R, T> Sentinel<StreamCursor<'_, R, T>> for StreamEnd {
    fn is_reached_by(&self, cursor: &StreamCursor<'_, R, T>) -> bool {
        cursor.stream.current.is_none()
    }
}

impl<'s, R, T> SequenceMut<'s> for StreamSequence<R, T>
where
    R: BufRead + 's,
    T: FromStr + Clone + 's,
    T::Err: fmt::Display,
{
    type CursorMut = StreamCursor<'s, R, T>;
    type SentinelMut = StreamEnd;

    fn bounds_mut(&'s mut self) -> (StreamCursor<'s, R, T>, StreamEnd) {
        self.read_next();
        (StreamCursor { stream: self }, StreamEnd)
    }
}

impl<R, T> View for StreamSequence<R, T> {}

impl<'a, R, T> Viewable<'a> for StreamSequence<R, T> {
    type View = StreamSequence<R, T>;

    fn into_view(self) -> Self {
        self
    }
}

impl<R, T, F> BitOr<TransformAdaptor<F>> for StreamSequence<R, T> {
    type Output = TransformView<StreamSequence<R, T>, F>;

    fn bitor(self, adaptor: TransformAdaptor<F>) -> Self::Output {
        TransformView::new(self, adaptor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tview_common::ErrorKind;

    fn drain<R: BufRead>(stream: &mut StreamSequence<R, i64>) -> Vec<i64> {
        let (mut cursor, end) = stream.bounds_mut();
        let mut out = Vec::new();
        while !end.is_reached_by(&cursor) {
            out.push(cursor.read());
            cursor.advance();
        }
        out
    }

    #[test]
    fn test_reads_across_lines() {
        let mut stream = StreamSequence::<_, i64>::from_text("1 2\n\n 3\t4\n5");
        assert_eq!(drain(&mut stream), [1, 2, 3, 4, 5]);
        assert_eq!(stream.values_read(), 5);
        assert!(stream.error().is_none());
    }

    #[test]
    fn test_second_pass_sees_nothing() {
        let mut stream = StreamSequence::<_, i64>::from_text("7 8");
        assert_eq!(drain(&mut stream), [7, 8]);
        assert!(drain(&mut stream).is_empty());
    }

    #[test]
    fn test_parse_failure_ends_sequence() {
        let mut stream = StreamSequence::<_, i64>::from_text("1 x 2");
        assert_eq!(drain(&mut stream), [1]);
        match stream.error().map(|e| e.kind()) {
            Some(ErrorKind::InvalidFormat { element, .. }) => assert_eq!(element, "x"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_open_missing_file() {
        let res = StreamSequence::<_, i64>::open("/definitely/not/here.txt");
        assert!(res.is_err());
    }
}
