use std::time::Duration;
use clap::Parser;
use crate::enums::failure_policy::FailurePolicy;

pub const DEFAULT_ENDPOINT_URL: &str = "https://ibluatapig.indusind.com/app/uat/IBLeTender";
pub const DEFAULT_SOAP_ACTION: &str = "http://tempuri.org/IIBLeTender/GetIecData";

#[derive(Parser, Debug, Clone)]
#[command(name = "iec-client", about = "Fetch IEC transaction data over SOAP")]
pub struct AppConfig {
    //e-Tender SOAP endpoint
    #[clap(long, env, default_value = DEFAULT_ENDPOINT_URL)]
    pub iec_endpoint_url: String,

    #[clap(long, env, default_value = DEFAULT_SOAP_ACTION)]
    pub iec_soap_action: String,

    #[clap(long, env, default_value = "ttt")]
    pub customer_tender_id: String,

    #[clap(long, env, default_value_t = 30)]
    pub request_timeout_secs: u64,

    //Prints the outgoing request to stdout, identifiers included
    #[clap(long, env, default_value_t = true, action = clap::ArgAction::Set)]
    pub dump_request: bool,

    #[clap(long, env, value_enum, default_value_t = FailurePolicy::Continue)]
    pub on_stage_error: FailurePolicy,
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
