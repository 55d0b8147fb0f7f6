use quick_xml::DeError;
use reqwest::header::InvalidHeaderValue;
use thiserror::Error;
use crate::enums::decode_stage::DecodeStage;

#[derive(Error, Debug)]
pub enum SoapError {
    #[error("failed to serialize SOAP envelope: {0}")]
    Serialization(#[source] DeError),

    #[error("invalid SOAPAction header: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    #[error("SOAP transport failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read SOAP response body: {0}")]
    Io(#[source] reqwest::Error),

    #[error("failed to decode {stage}: {source}")]
    Decode {
        stage: DecodeStage,
        #[source]
        source: DecodeError,
    },
}

impl SoapError {
    pub fn decode(stage: DecodeStage) -> impl FnOnce(DecodeError) -> SoapError {
        move |source| SoapError::Decode { stage, source }
    }
}

/// Why a response document could not be read into its typed shape.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Not well-formed XML
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("document has no root element")]
    Empty,

    #[error("element <{0}> is never closed")]
    Unclosed(String),

    #[error("unexpected root element <{found}>, expected <{expected}>")]
    UnexpectedRoot { expected: &'static str, found: String },

    #[error("missing required element: {0}")]
    MissingElement(&'static str),

    /// Element text that does not fit the record field
    #[error("invalid field value: {0}")]
    Field(#[from] serde::de::value::Error),
}
