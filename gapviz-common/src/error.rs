use std::num::ParseFloatError;
use std::result;
use thiserror::Error;

pub type Result<T> = result::Result<T, GapVizError>;

#[derive(Clone, Debug, Default)]
pub struct ErrorContext {
    pub contexts: Vec<String>,
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, context) in self.contexts.iter().enumerate() {
            writeln!(f, "    Context[{i}]: {context}")?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum GapVizError {
    #[error("Data error: {0}\n{1}")]
    DataError(String, ErrorContext),

    #[error("Empty range error: {0}\n{1}")]
    EmptyRangeError(String, ErrorContext),

    #[error("Chart specification error: {0}\n{1}")]
    SpecificationError(String, ErrorContext),

    #[error("Internal error: {0}\n{1}")]
    InternalError(String, ErrorContext),

    #[error("External error: {0}\n{1}")]
    ExternalError(String, ErrorContext),

    #[error("Format error: {0}\n{1}")]
    FormatError(std::fmt::Error, ErrorContext),

    #[error("IO Error: {0}\n{1}")]
    IOError(std::io::Error, ErrorContext),

    #[error("CSV error: {0}\n{1}")]
    CsvError(csv::Error, ErrorContext),

    #[error("Serde JSON Error: {0}\n{1}")]
    SerdeJsonError(serde_json::Error, ErrorContext),
}

impl GapVizError {
    /// Append a new context level to the error
    pub fn with_context<S, F>(self, context_fn: F) -> Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        use GapVizError::*;
        match self {
            DataError(msg, mut context) => {
                context.contexts.push(context_fn().into());
                GapVizError::DataError(msg, context)
            }
            EmptyRangeError(msg, mut context) => {
                context.contexts.push(context_fn().into());
                GapVizError::EmptyRangeError(msg, context)
            }
            SpecificationError(msg, mut context) => {
                context.contexts.push(context_fn().into());
                GapVizError::SpecificationError(msg, context)
            }
            InternalError(msg, mut context) => {
                context.contexts.push(context_fn().into());
                GapVizError::InternalError(msg, context)
            }
            ExternalError(msg, mut context) => {
                context.contexts.push(context_fn().into());
                GapVizError::ExternalError(msg, context)
            }
            FormatError(err, mut context) => {
                context.contexts.push(context_fn().into());
                GapVizError::FormatError(err, context)
            }
            IOError(err, mut context) => {
                context.contexts.push(context_fn().into());
                GapVizError::IOError(err, context)
            }
            CsvError(err, mut context) => {
                context.contexts.push(context_fn().into());
                GapVizError::CsvError(err, context)
            }
            SerdeJsonError(err, mut context) => {
                context.contexts.push(context_fn().into());
                GapVizError::SerdeJsonError(err, context)
            }
        }
    }

    pub fn data<S: Into<String>>(message: S) -> Self {
        Self::DataError(message.into(), Default::default())
    }

    pub fn empty_range<S: Into<String>>(message: S) -> Self {
        Self::EmptyRangeError(message.into(), Default::default())
    }

    pub fn specification<S: Into<String>>(message: S) -> Self {
        Self::SpecificationError(message.into(), Default::default())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::InternalError(message.into(), Default::default())
    }

    pub fn external<S: Into<String>>(message: S) -> Self {
        Self::ExternalError(message.into(), Default::default())
    }
}

pub trait ResultWithContext<R> {
    fn with_context<S, F>(self, context_fn: F) -> Result<R>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<R, E> ResultWithContext<R> for result::Result<R, E>
where
    E: Into<GapVizError>,
{
    fn with_context<S, F>(self, context_fn: F) -> Result<R>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        match self {
            Ok(val) => Ok(val),
            Err(err) => {
                let gap_viz_error: GapVizError = err.into();
                Err(gap_viz_error.with_context(context_fn))
            }
        }
    }
}

impl<R> ResultWithContext<R> for Option<R> {
    fn with_context<S, F>(self, context_fn: F) -> Result<R>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        match self {
            Some(val) => Ok(val),
            None => Err(GapVizError::internal(context_fn().into())),
        }
    }
}

impl From<ParseFloatError> for GapVizError {
    fn from(err: ParseFloatError) -> Self {
        Self::data(err.to_string())
    }
}

impl From<std::fmt::Error> for GapVizError {
    fn from(err: std::fmt::Error) -> Self {
        Self::FormatError(err, Default::default())
    }
}

impl From<std::io::Error> for GapVizError {
    fn from(err: std::io::Error) -> Self {
        Self::IOError(err, Default::default())
    }
}

impl From<csv::Error> for GapVizError {
    fn from(err: csv::Error) -> Self {
        Self::CsvError(err, Default::default())
    }
}

impl From<serde_json::Error> for GapVizError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerdeJsonError(err, Default::default())
    }
}

pub trait ToExternalError<T> {
    fn external<S: Into<String>>(self, context: S) -> Result<T>;
}

impl<T, E: std::error::Error> ToExternalError<T> for std::result::Result<T, E> {
    fn external<S: Into<String>>(self, context: S) -> Result<T> {
        match self {
            Ok(v) => Ok(v),
            Err(err) => {
                let context = ErrorContext {
                    contexts: vec![context.into()],
                };
                Err(GapVizError::ExternalError(err.to_string(), context))
            }
        }
    }
}
