use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
pub mod iec;
pub mod transaction;

pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const XML_SCHEMA_INSTANCE_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const XML_SCHEMA_NS: &str = "http://www.w3.org/2001/XMLSchema";

/// A request payload that can be carried in a SOAP body.
pub trait SoapRequest: Serialize {
    /// Name of the payload element inside `soap:Body`.
    const ELEMENT: &'static str;
}

/// Outgoing SOAP 1.1 envelope. The payload is written as the only child of `soap:Body`,
/// named by [`SoapRequest::ELEMENT`].
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename = "soap:Envelope", bound(serialize = "T: SoapRequest"))]
pub struct Envelope<T> {
    #[serde(rename = "@xmlns:soap")]
    pub xmlns_soap: String,
    #[serde(rename = "@xmlns:xsi")]
    pub xmlns_xsi: String,
    #[serde(rename = "@xmlns:xsd")]
    pub xmlns_xsd: String,
    //Prefixes are dropped when reading element names back
    #[serde(rename(serialize = "soap:Body", deserialize = "Body"))]
    pub body: Body<T>,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct Body<T> {
    #[serde(rename = "$value")]
    pub payload: T,
}

impl<T: SoapRequest> Serialize for Body<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut body = serializer.serialize_struct("soap:Body", 1)?;
        body.serialize_field(T::ELEMENT, &self.payload)?;
        body.end()
    }
}

impl<T: SoapRequest> Envelope<T> {
    pub fn new(payload: T) -> Self {
        Self {
            xmlns_soap: SOAP_ENVELOPE_NS.to_string(),
            xmlns_xsi: XML_SCHEMA_INSTANCE_NS.to_string(),
            xmlns_xsd: XML_SCHEMA_NS.to_string(),
            body: Body { payload },
        }
    }
}

/// Incoming SOAP envelope, generic over what `Body` wraps.
#[derive(Debug, Default, PartialEq)]
pub struct ResponseEnvelope<T> {
    pub body: T,
}
