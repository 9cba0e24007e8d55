//! The single students fetch: build, execute under a timeout, parse, shape.
//!
//! Every failure is classified into a [`FetchError`] and folded into
//! [`FetchOutcome::Failure`]; callers never see an error value. One attempt
//! only.

use tracing::{debug, info, warn};

use crate::client::StudentsClient;
use crate::error::FetchError;
use crate::http::{Transport, TransportError};
use crate::transform::transform;
use crate::types::{FetchOutcome, Student};

/// Fetch and transform the student list.
pub async fn fetch_students<T>(client: &StudentsClient, transport: &T) -> FetchOutcome
where
    T: Transport + ?Sized,
{
    let outcome = FetchOutcome::from(try_fetch_students(client, transport).await);
    match &outcome {
        FetchOutcome::Success(students) => info!(count = students.len(), "students loaded"),
        FetchOutcome::Failure(message) => warn!(%message, "students fetch failed"),
    }
    outcome
}

/// Same pipeline as [`fetch_students`] with the classified error kept.
pub async fn try_fetch_students<T>(
    client: &StudentsClient,
    transport: &T,
) -> Result<Vec<Student>, FetchError>
where
    T: Transport + ?Sized,
{
    let request = client.build_list_users();
    debug!(url = %request.url, timeout_ms = client.timeout().as_millis() as u64, "fetching students");

    let response = tokio::time::timeout(client.timeout(), transport.execute(request))
        .await
        .map_err(|_| FetchError::Timeout)?
        .map_err(classify_transport_error)?;

    let users = client.parse_list_users(response)?;
    Ok(transform(&users))
}

fn classify_transport_error(error: TransportError) -> FetchError {
    debug!(%error, "transport failed");
    match error {
        TransportError::Timeout => FetchError::Timeout,
        TransportError::NoResponse(_) => FetchError::NetworkError,
        TransportError::Other(_) => FetchError::Unknown,
    }
}
