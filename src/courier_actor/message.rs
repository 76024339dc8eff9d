//! Requests understood by the courier board actor.

use super::{CourierAction, CourierError};
use crate::model::{CourierOrder, CourierOrderId};
use tokio::sync::oneshot;

/// One-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, CourierError>>;

#[derive(Debug)]
pub enum CourierRequest {
    List {
        respond_to: Response<Vec<CourierOrder>>,
    },
    Get {
        id: CourierOrderId,
        respond_to: Response<Option<CourierOrder>>,
    },
    Action {
        id: CourierOrderId,
        action: CourierAction,
        respond_to: Response<CourierOrder>,
    },
}
