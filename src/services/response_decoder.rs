//! Two independent decode passes over a GetIecData response: the SOAP envelope first,
//! then the IECRequest document that the service escapes into `GetIecDataResult`.
//!
//! Both passes read the document into a small element tree with the quick-xml event
//! reader, which leaves text untrimmed, so element text comes back exactly as sent.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::de::value::MapDeserializer;
use serde::Deserialize;
use crate::enums::decode_stage::DecodeStage;
use crate::errors::{DecodeError, SoapError};
use crate::models::iec::{GetIecDataEnvelope, GetIecDataResponse, GetIecDataResponseBody, IecRequest};
use crate::models::transaction::Transaction;
use crate::models::ResponseEnvelope;

pub fn decode_outer(raw: &[u8]) -> Result<GetIecDataEnvelope, SoapError> {
    read_envelope(raw).map_err(SoapError::decode(DecodeStage::Outer))
}

pub fn decode_inner(xml: &str) -> Result<IecRequest, SoapError> {
    read_iec_request(xml).map_err(SoapError::decode(DecodeStage::Inner))
}

fn read_envelope(raw: &[u8]) -> Result<GetIecDataEnvelope, DecodeError> {
    let envelope = XmlElement::parse(raw)?.expect_root("Envelope")?;
    let response = envelope.require("Body")?.require("GetIecDataResponse")?;
    Ok(ResponseEnvelope {
        body: GetIecDataResponseBody {
            get_iec_data_response: GetIecDataResponse {
                xmlns: response.attribute("xmlns").unwrap_or_default().to_string(),
                get_iec_data_result: response
                    .child("GetIecDataResult")
                    .map(|result| result.text.clone())
                    .unwrap_or_default(),
            },
        },
    })
}

fn read_iec_request(xml: &str) -> Result<IecRequest, DecodeError> {
    let root = XmlElement::parse(xml.as_bytes())?.expect_root("IECRequest")?;
    let fields = root
        .require("Transaction")?
        .children
        .iter()
        .map(|field| (field.name.as_str(), field.text.as_str()));
    let transaction = Transaction::deserialize(MapDeserializer::<_, serde::de::value::Error>::new(fields))?;
    Ok(IecRequest { transaction })
}

/// Element with its local name, attributes by qualified name, and concatenated text.
#[derive(Debug, Default)]
struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Reads the first root element of `xml`; anything after it is ignored.
    fn parse(xml: &[u8]) -> Result<XmlElement, DecodeError> {
        let mut reader = Reader::from_reader(xml);
        let mut open: Vec<XmlElement> = Vec::new();
        loop {
            match reader.read_event()? {
                Event::Start(e) => open.push(Self::open(&reader, &e)?),
                Event::Empty(e) => {
                    let element = Self::open(&reader, &e)?;
                    if let Some(root) = Self::close(&mut open, element) {
                        return Ok(root);
                    }
                }
                Event::End(_) => {
                    let element = open.pop().ok_or(DecodeError::Empty)?;
                    if let Some(root) = Self::close(&mut open, element) {
                        return Ok(root);
                    }
                }
                Event::Text(e) => {
                    if let Some(current) = open.last_mut() {
                        current.text.push_str(&e.unescape()?);
                    }
                }
                Event::CData(e) => {
                    if let Some(current) = open.last_mut() {
                        current.text.push_str(&reader.decoder().decode(&e.into_inner())?);
                    }
                }
                Event::Eof => {
                    return Err(match open.into_iter().next() {
                        Some(root) => DecodeError::Unclosed(root.name),
                        None => DecodeError::Empty,
                    });
                }
                _ => {}
            }
        }
    }

    fn open(reader: &Reader<&[u8]>, start: &BytesStart) -> Result<XmlElement, DecodeError> {
        let decoder = reader.decoder();
        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(quick_xml::Error::from)?;
            let key = decoder.decode(attribute.key.as_ref())?.into_owned();
            attributes.push((key, attribute.unescape_value()?.into_owned()));
        }
        Ok(XmlElement {
            name: decoder.decode(start.local_name().as_ref())?.into_owned(),
            attributes,
            ..Default::default()
        })
    }

    /// Attaches `element` to its parent, or hands it back when it is the root.
    fn close(open: &mut [XmlElement], element: XmlElement) -> Option<XmlElement> {
        match open.last_mut() {
            Some(parent) => {
                parent.children.push(element);
                None
            }
            None => Some(element),
        }
    }

    fn expect_root(self, expected: &'static str) -> Result<XmlElement, DecodeError> {
        if self.name == expected {
            Ok(self)
        } else {
            Err(DecodeError::UnexpectedRoot { expected, found: self.name })
        }
    }

    fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    fn require(&self, name: &'static str) -> Result<&XmlElement, DecodeError> {
        self.child(name).ok_or(DecodeError::MissingElement(name))
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
