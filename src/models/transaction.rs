use serde::{Deserialize, Serialize};

/// One remittance as reported by the e-Tender service. Every value is opaque text.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde(rename = "Request_ID")]
    pub request_id: String,
    #[serde(rename = "CHALLAN_CODE")]
    pub challan_code: String,
    #[serde(rename = "CHALLAN_NO")]
    pub challan_no: String,
    #[serde(rename = "Client_AccountNo")]
    pub client_account_no: String,
    #[serde(rename = "Client_Name")]
    pub client_name: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Remitter_Name")]
    pub remitter_name: String,
    #[serde(rename = "Remitter_AccountNo")]
    pub remitter_account_no: String,
    #[serde(rename = "Remitter_IFSC")]
    pub remitter_ifsc: String,
    #[serde(rename = "Remitter_Bank")]
    pub remitter_bank: String,
    #[serde(rename = "Remitter_Branch")]
    pub remitter_branch: String,
    #[serde(rename = "Remitter_UTR")]
    pub remitter_utr: String,
    #[serde(rename = "Pay_Method")]
    pub pay_method: String,
    #[serde(rename = "Credit_AccountNo")]
    pub credit_account_no: String,
    #[serde(rename = "Inward_Ref_Num")]
    pub inward_ref_num: String,
    #[serde(rename = "Credit_Time")]
    pub credit_time: String,
    #[serde(rename = "Reserve1")]
    pub reserve1: String,
    #[serde(rename = "Reserve2")]
    pub reserve2: String,
    #[serde(rename = "Reserve3")]
    pub reserve3: String,
    #[serde(rename = "Reserve4")]
    pub reserve4: String,
    #[serde(rename = "ResponseCode")]
    pub response_code: String,
    #[serde(rename = "ResponseDesc")]
    pub response_desc: String,
}
