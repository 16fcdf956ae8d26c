use thiserror::Error;

/// Every fatal condition the semantic analyzer can raise. Each variant names
/// the offending identifier and/or path, matching the taxonomy in the
/// system's error handling design. All variants are fatal and single-shot:
/// there is no recovery path, only propagation to the process boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("XmlParse: {0}")]
    XmlParse(String),

    #[error("BadRoot: root element is `{found}`, expected `fix`")]
    BadRoot { found: String },

    #[error("MissingRootAttr: root element is missing `{0}`")]
    MissingRootAttr(&'static str),

    #[error("InvalidTagNumber: field `{0}` has a non-integer `number` attribute")]
    InvalidTagNumber(String),

    #[error("NoFields: the dictionary defines zero fields")]
    NoFields,

    #[error("MissingLengthTag: DATA field `{0}` has no `{0}Len`/`{0}Length` companion")]
    MissingLengthTag(String),

    #[error("UnknownNode: `{path}` references undefined name `{name}`")]
    UnknownNode { path: String, name: String },

    #[error("DuplicateTag: `{path}` contains `{name}` more than once")]
    DuplicateTag { path: String, name: String },

    #[error("EmptyBlock: `{0}` has no entries")]
    EmptyBlock(String),

    #[error("UnknownComponent: component `{0}` does not resolve")]
    UnknownComponent(String),

    #[error("CycleSuspected: expansion of `{0}` exceeds the depth limit")]
    CycleSuspected(String),

    #[error(
        "LengthDataMismatch: length tag for `{length_tag}` is followed by `{found}`, expected `{expected}`"
    )]
    LengthDataMismatch {
        length_tag: String,
        found: String,
        expected: String,
    },

    #[error("UnexpectedDataTag: `{0}` appears without a preceding length tag")]
    UnexpectedDataTag(String),

    #[error("InvalidHeader: position {position}, found `{found}`, expected `{expected}`")]
    InvalidHeader {
        position: usize,
        found: String,
        expected: &'static str,
    },

    #[error("HeaderTooShort: header has fewer than 3 leading entries")]
    HeaderTooShort,

    #[error("InvalidTrailer: trailer is empty or does not end with CheckSum")]
    InvalidTrailer,
}

pub type ParseResult<T> = Result<T, ParseError>;
