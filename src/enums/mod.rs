pub mod decode_stage;
pub mod failure_policy;
