use miette::{Diagnostic, SourceSpan};
use std::{
    error::Error,
    fmt::{Display, Formatter, Result},
};

#[derive(Debug, Clone, PartialEq, Diagnostic)]
pub enum ColorParseError {
    #[diagnostic(code(oxblend::empty), url(docsrs))]
    Empty,

    #[diagnostic(
        code(oxblend::invalid_hex),
        url(docsrs),
        help("expected #RGB, #RRGGBB or #AAGGBBRR")
    )]
    InvalidHex {
        #[source_code]
        src: String,
        #[label("not a hex color")]
        err_span: SourceSpan,
    },

    #[diagnostic(
        code(oxblend::mismatched_groups),
        url(docsrs),
        help("hex colors take 3, 6 or 8 digits")
    )]
    MismatchedGroups {
        #[source_code]
        src: String,
        #[label("digit groups disagree here")]
        err_span: SourceSpan,
    },

    #[diagnostic(
        code(oxblend::invalid_func),
        url(docsrs),
        help("expected rgb(r, g, b) or rgba(r, g, b, a)")
    )]
    InvalidFunc {
        #[source_code]
        src: String,
        #[label("malformed color function")]
        err_span: SourceSpan,
        msg: String,
    },

    #[diagnostic(code(oxblend::invalid_number), url(docsrs))]
    InvalidNumber {
        #[source_code]
        src: String,
        #[label("not a number")]
        err_span: SourceSpan,
        channel: &'static str,
    },

    #[diagnostic(
        code(oxblend::out_of_range),
        url(docsrs),
        help("channels take 0..=255 or 0%..=100%, alpha takes 0..=1")
    )]
    OutOfRange {
        #[source_code]
        src: String,
        #[label("out of range")]
        err_span: SourceSpan,
        channel: &'static str,
        value: f64,
    },
}

pub type ColorResult<T> = std::result::Result<T, ColorParseError>;

impl Display for ColorParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ColorParseError::Empty => write!(f, "Empty color string"),
            ColorParseError::InvalidHex { src, .. } => {
                write!(f, "Cannot parse string as hex: {:?}", src)
            }
            ColorParseError::MismatchedGroups { src, .. } => {
                write!(f, "Hex digit groups have mismatched lengths: {:?}", src)
            }
            ColorParseError::InvalidFunc { src, msg, .. } => {
                write!(f, "Cannot parse string as RGB: {:?} ({})", src, msg)
            }
            ColorParseError::InvalidNumber { src, channel, .. } => {
                write!(f, "Invalid {} value in RGB string: {:?}", channel, src)
            }
            ColorParseError::OutOfRange {
                src,
                channel,
                value,
                ..
            } => write!(
                f,
                "RGB string provided with invalid {} value {}: {:?}",
                channel, value, src
            ),
        }
    }
}

impl Error for ColorParseError {}

impl ColorParseError {
    pub fn invalid_hex(src: impl Into<String>, err_span: impl Into<SourceSpan>) -> Self {
        Self::InvalidHex {
            src: src.into(),
            err_span: err_span.into(),
        }
    }

    pub fn mismatched_groups(src: impl Into<String>, err_span: impl Into<SourceSpan>) -> Self {
        Self::MismatchedGroups {
            src: src.into(),
            err_span: err_span.into(),
        }
    }

    pub fn invalid_func(
        src: impl Into<String>,
        err_span: impl Into<SourceSpan>,
        msg: impl Into<String>,
    ) -> Self {
        Self::InvalidFunc {
            src: src.into(),
            err_span: err_span.into(),
            msg: msg.into(),
        }
    }

    pub fn invalid_number(
        src: impl Into<String>,
        err_span: impl Into<SourceSpan>,
        channel: &'static str,
    ) -> Self {
        Self::InvalidNumber {
            src: src.into(),
            err_span: err_span.into(),
            channel,
        }
    }

    pub fn out_of_range(
        src: impl Into<String>,
        err_span: impl Into<SourceSpan>,
        channel: &'static str,
        value: f64,
    ) -> Self {
        Self::OutOfRange {
            src: src.into(),
            err_span: err_span.into(),
            channel,
            value,
        }
    }
}
