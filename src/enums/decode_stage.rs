use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeStage {
    //SOAP envelope around GetIecDataResponse
    Outer,
    //IECRequest document carried as text in GetIecDataResult
    Inner,
}

impl Display for DecodeStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeStage::Outer => f.write_str("outer envelope"),
            DecodeStage::Inner => f.write_str("inner IEC data"),
        }
    }
}
