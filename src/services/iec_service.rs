use std::ops::ControlFlow;
use tracing::{debug, error, info};
use crate::enums::failure_policy::FailurePolicy;
use crate::errors::SoapError;
use crate::models::iec::{GetIecDataEnvelope, GetIecDataRequest, IecRequest};
use crate::repositories::soap_repository::SoapRepository;
use crate::services::response_decoder::{decode_inner, decode_outer};
use crate::utils::mask::secure_serializable;

/// Everything the GetIecData workflow produced, stage by stage. A failed stage leaves
/// its value at the default.
#[derive(Debug, Default)]
pub struct IecOutcome {
    pub raw_response: Vec<u8>,
    pub envelope: GetIecDataEnvelope,
    pub iec_data: IecRequest,
    pub failures: Vec<SoapError>,
    pub aborted: bool,
}

impl IecOutcome {
    pub fn response_code(&self) -> &str {
        &self.iec_data.transaction.response_code
    }
}

#[derive(Clone)]
pub struct IecService {
    soap_repository: SoapRepository,
    soap_action: String,
    policy: FailurePolicy,
}

impl IecService {
    pub fn new(soap_repository: SoapRepository, soap_action: String, policy: FailurePolicy) -> Self {
        Self {
            soap_repository,
            soap_action,
            policy,
        }
    }

    pub async fn run(&self, customer_tender_id: &str) -> IecOutcome {
        let mut outcome = IecOutcome::default();

        let payload = GetIecDataRequest::new(customer_tender_id);
        let called = self.soap_repository.call(&self.soap_action, payload).await;
        let ControlFlow::Continue(raw) = self.settle(&mut outcome, "call SOAP : GetIecData", called) else {
            return outcome;
        };
        outcome.raw_response = raw;

        let decoded = decode_outer(&outcome.raw_response);
        let ControlFlow::Continue(envelope) = self.settle(&mut outcome, "unmarshal : GetIecData", decoded) else {
            return outcome;
        };
        outcome.envelope = envelope;

        let decoded = decode_inner(outcome.envelope.result());
        let ControlFlow::Continue(iec_data) = self.settle(&mut outcome, "unmarshal : IECRequest", decoded) else {
            return outcome;
        };
        outcome.iec_data = iec_data;

        debug!(
            transaction = %secure_serializable(&outcome.iec_data.transaction),
            "Decoded IEC data"
        );
        info!(
            response_code = %outcome.response_code(),
            failures = outcome.failures.len(),
            "GetIecData finished"
        );
        outcome
    }

    fn settle<T: Default>(
        &self,
        outcome: &mut IecOutcome,
        step: &str,
        result: Result<T, SoapError>,
    ) -> ControlFlow<(), T> {
        match result {
            Ok(value) => ControlFlow::Continue(value),
            Err(e) => {
                error!("Failed to {} : {}", step, e);
                outcome.failures.push(e);
                match self.policy {
                    FailurePolicy::Continue => ControlFlow::Continue(T::default()),
                    FailurePolicy::Abort => {
                        outcome.aborted = true;
                        ControlFlow::Break(())
                    }
                }
            }
        }
    }
}
