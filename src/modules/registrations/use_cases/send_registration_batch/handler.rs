use chrono::Utc;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

use crate::modules::registrations::core::outcome::RequestOutcome;
use crate::modules::registrations::core::ports::RegistrationTransport;
use crate::modules::registrations::use_cases::send_registration_batch::command::SendRegistrationBatch;
use crate::modules::registrations::use_cases::send_registration_batch::report::BatchReport;

pub struct SendRegistrationBatchHandler<TTransport>
where
    TTransport: RegistrationTransport + 'static,
{
    transport: Arc<TTransport>,
}

impl<TTransport> SendRegistrationBatchHandler<TTransport>
where
    TTransport: RegistrationTransport + 'static,
{
    pub fn new(transport: Arc<TTransport>) -> Self {
        Self { transport }
    }

    /// Issues every request of the batch without waiting on any of them, then
    /// hands each outcome to `on_outcome` in completion order. Returns once all
    /// requests have finished.
    pub async fn handle<F>(&self, command: SendRegistrationBatch, mut on_outcome: F) -> BatchReport
    where
        F: FnMut(&RequestOutcome),
    {
        let run_id = Uuid::now_v7();
        let span = info_span!("registration_batch", %run_id);

        async move {
            let started_at = Utc::now();
            let requests = command.requests();
            let issued = requests.len();

            let mut tasks = JoinSet::new();
            for (index, request) in requests.into_iter().enumerate() {
                let transport = Arc::clone(&self.transport);
                tasks.spawn(
                    async move {
                        match transport.send(index, &request).await {
                            Ok(response) => RequestOutcome::Succeeded(response),
                            Err(error) => RequestOutcome::Failed {
                                index,
                                username: request.username,
                                error,
                            },
                        }
                    }
                    .in_current_span(),
                );
            }
            info!(issued, "registration batch issued");

            let mut outcomes = Vec::with_capacity(issued);
            let mut aborted = 0;
            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok(outcome) => {
                        match &outcome {
                            RequestOutcome::Succeeded(response) => debug!(
                                index = response.index,
                                username = %response.username,
                                status = response.status,
                                "registration completed"
                            ),
                            RequestOutcome::Failed {
                                index,
                                username,
                                error,
                            } => warn!(index, %username, %error, "registration failed"),
                        }
                        on_outcome(&outcome);
                        outcomes.push(outcome);
                    }
                    Err(join_error) => {
                        aborted += 1;
                        error!(error = %join_error, "registration task aborted");
                    }
                }
            }

            BatchReport {
                run_id,
                started_at,
                finished_at: Utc::now(),
                issued,
                outcomes,
                aborted,
            }
        }
        .instrument(span)
        .await
    }
}
