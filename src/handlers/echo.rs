//! Identity handler.

use crate::dispatch::HandlerError;
use crate::proto::HappyDayRequest;

/// Return the decoded request unchanged.
pub async fn echo(request: HappyDayRequest) -> Result<HappyDayRequest, HandlerError> {
    Ok(request)
}
