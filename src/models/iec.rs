use serde::{Deserialize, Serialize};
use crate::models::transaction::Transaction;
use crate::models::{ResponseEnvelope, SoapRequest};

pub const TEMPURI_NS: &str = "http://tempuri.org/";

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename = "GetIecData")]
pub struct GetIecDataRequest {
    #[serde(rename = "@xmlns")]
    pub xmlns: String,
    #[serde(rename = "CustomerTenderId")]
    pub customer_tender_id: String,
}

impl SoapRequest for GetIecDataRequest {
    const ELEMENT: &'static str = "GetIecData";
}

impl GetIecDataRequest {
    pub fn new(customer_tender_id: &str) -> Self {
        Self {
            xmlns: TEMPURI_NS.to_string(),
            customer_tender_id: customer_tender_id.to_string(),
        }
    }
}

pub type GetIecDataEnvelope = ResponseEnvelope<GetIecDataResponseBody>;

#[derive(Debug, Default, PartialEq)]
pub struct GetIecDataResponseBody {
    pub get_iec_data_response: GetIecDataResponse,
}

#[derive(Debug, Default, PartialEq)]
pub struct GetIecDataResponse {
    pub xmlns: String,
    //Escaped IECRequest document, decoded separately
    pub get_iec_data_result: String,
}

impl GetIecDataEnvelope {
    pub fn result(&self) -> &str {
        &self.body.get_iec_data_response.get_iec_data_result
    }
}

/// Document carried inside `GetIecDataResult`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct IecRequest {
    pub transaction: Transaction,
}
