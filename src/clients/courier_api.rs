//! # CourierApi Trait
//!
//! The operations the courier panel needs from a courier board. Implementors provide
//! the three primitive requests; `start_delivery`, `finish_delivery` and `active` are
//! built on top of them.
use crate::courier_actor::{CourierAction, CourierError};
use crate::model::{CourierOrder, CourierOrderId};
use async_trait::async_trait;

#[async_trait]
pub trait CourierApi: Send + Sync {
    /// Every order on the board, by id.
    async fn list(&self) -> Result<Vec<CourierOrder>, CourierError>;

    async fn get(&self, id: CourierOrderId) -> Result<Option<CourierOrder>, CourierError>;

    async fn perform_action(
        &self,
        id: CourierOrderId,
        action: CourierAction,
    ) -> Result<CourierOrder, CourierError>;

    #[tracing::instrument(skip(self))]
    async fn start_delivery(&self, id: CourierOrderId) -> Result<CourierOrder, CourierError> {
        self.perform_action(id, CourierAction::StartDelivery).await
    }

    #[tracing::instrument(skip(self))]
    async fn finish_delivery(&self, id: CourierOrderId) -> Result<CourierOrder, CourierError> {
        self.perform_action(id, CourierAction::FinishDelivery).await
    }

    /// Orders that still need a courier, i.e. not completed.
    async fn active(&self) -> Result<Vec<CourierOrder>, CourierError> {
        let orders = self.list().await?;
        Ok(orders.into_iter().filter(CourierOrder::is_active).collect())
    }
}
