pub mod iec_service;
pub mod response_decoder;
