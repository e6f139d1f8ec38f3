use reqwest::Response;

use crate::errors::{Error, RequestError, Result};

/// Convert non-2xx responses into [`RequestError::UnexpectedStatus`].
///
/// Used by calls that bypass the executor and judge success by the status
/// class alone, such as the password reset.
pub(crate) fn check_http_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    Err(Error::from(RequestError::UnexpectedStatus { status }))
}
