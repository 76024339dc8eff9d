//! # Courier Client
//!
//! Provides a high‑level API for interacting with the [`CourierBoard`](crate::courier_actor::CourierBoard).
//! It wraps the request channel and turns channel failures into [`CourierError`].
use crate::clients::CourierApi;
use crate::courier_actor::{CourierAction, CourierError, CourierRequest};
use crate::model::{CourierOrder, CourierOrderId};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Cloneable handle to the courier board. The board stops once every clone is dropped.
#[derive(Clone)]
pub struct CourierClient {
    sender: mpsc::Sender<CourierRequest>,
}

impl CourierClient {
    pub fn new(sender: mpsc::Sender<CourierRequest>) -> Self {
        Self { sender }
    }

    async fn request<T: Send>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, CourierError>>) -> CourierRequest + Send,
    ) -> Result<T, CourierError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| CourierError::ActorCommunicationError("Courier board closed".into()))?;
        response.await.map_err(|_| {
            CourierError::ActorCommunicationError("Courier board dropped response channel".into())
        })?
    }
}

#[async_trait]
impl CourierApi for CourierClient {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<CourierOrder>, CourierError> {
        debug!("Sending request");
        self.request(|respond_to| CourierRequest::List { respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn get(&self, id: CourierOrderId) -> Result<Option<CourierOrder>, CourierError> {
        debug!("Sending request");
        self.request(|respond_to| CourierRequest::Get { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn perform_action(
        &self,
        id: CourierOrderId,
        action: CourierAction,
    ) -> Result<CourierOrder, CourierError> {
        debug!("Sending request");
        self.request(|respond_to| CourierRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeliveryStatus;

    /// Client wired to a bare channel so the test plays the board's part.
    fn scripted_client() -> (CourierClient, mpsc::Receiver<CourierRequest>) {
        let (sender, receiver) = mpsc::channel(4);
        (CourierClient::new(sender), receiver)
    }

    #[tokio::test]
    async fn start_delivery_sends_start_action() {
        let (client, mut receiver) = scripted_client();

        let call = tokio::spawn(async move { client.start_delivery(CourierOrderId(101)).await });

        let Some(CourierRequest::Action {
            id,
            action,
            respond_to,
        }) = receiver.recv().await
        else {
            panic!("Expected Action request");
        };
        assert_eq!(id, CourierOrderId(101));
        assert_eq!(action, CourierAction::StartDelivery);

        let reply = CourierOrder::new(101, "ул. Пушкина, 15", ["Кола"], 120, DeliveryStatus::Delivering);
        respond_to.send(Ok(reply.clone())).unwrap();

        assert_eq!(call.await.unwrap().unwrap(), reply);
    }

    #[tokio::test]
    async fn active_filters_out_completed_orders() {
        let (client, mut receiver) = scripted_client();

        let call = tokio::spawn(async move { client.active().await });

        let Some(CourierRequest::List { respond_to }) = receiver.recv().await else {
            panic!("Expected List request");
        };
        respond_to
            .send(Ok(vec![
                CourierOrder::new(1, "a", ["x"], 10, DeliveryStatus::Pending),
                CourierOrder::new(2, "b", ["y"], 20, DeliveryStatus::Completed),
            ]))
            .unwrap();

        let active = call.await.unwrap().unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, CourierOrderId(1));
    }

    #[tokio::test]
    async fn closed_board_is_a_communication_error() {
        let (client, receiver) = scripted_client();
        drop(receiver);

        let err = client.get(CourierOrderId(1)).await.unwrap_err();
        assert!(matches!(err, CourierError::ActorCommunicationError(_)));
    }

    #[tokio::test]
    async fn dropped_reply_is_a_communication_error() {
        let (client, mut receiver) = scripted_client();

        let call = tokio::spawn(async move { client.list().await });
        let request = receiver.recv().await.expect("Expected a request");
        drop(request);

        let err = call.await.unwrap().unwrap_err();
        assert!(matches!(err, CourierError::ActorCommunicationError(_)));
    }
}
