/// Account number masking for log output
pub mod mask;
