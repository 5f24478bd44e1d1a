//! Single-outstanding-request lookup client.
//!
//! The picker screens only ever care about the latest lookup: typing a
//! new query while the previous one is in flight should abandon the old
//! one, and its caller should see that it was cancelled rather than
//! receive results that no longer match the screen.

use std::future::Future;
use std::sync::Arc;

use geopicker_models::{Coordinate, Place};
use tokio::sync::oneshot;

use crate::{BiasRegion, GeocodeError, GeocodingGateway};

/// Receives the outcome of one lookup.
///
/// The owner awaits this on its own context, which is how completions get
/// marshaled back to the single-threaded screen that applies them.
pub type LookupReceiver = oneshot::Receiver<Result<Vec<Place>, GeocodeError>>;

/// Issues lookups against a gateway, at most one in flight.
///
/// Starting a new lookup cancels the pending one; its receiver resolves
/// to [`GeocodeError::Cancelled`]. Dropping the client cancels the
/// pending lookup as well.
///
/// Lookups are spawned onto the ambient tokio runtime, so the client
/// must be used from within one; calling `forward_lookup` or
/// `reverse_lookup` outside a runtime panics.
pub struct LookupClient {
    gateway: Arc<dyn GeocodingGateway>,
    cancel_pending: Option<oneshot::Sender<()>>,
}

impl LookupClient {
    /// Creates a client over the given gateway.
    #[must_use]
    pub fn new(gateway: Arc<dyn GeocodingGateway>) -> Self {
        Self {
            gateway,
            cancel_pending: None,
        }
    }

    /// Starts a forward lookup, cancelling any pending one.
    pub fn forward_lookup(&mut self, query: &str, bias: Option<BiasRegion>) -> LookupReceiver {
        let gateway = Arc::clone(&self.gateway);
        let query = query.to_string();
        self.issue(async move { gateway.forward_lookup(&query, bias.as_ref()).await })
    }

    /// Starts a reverse lookup, cancelling any pending one.
    pub fn reverse_lookup(&mut self, coordinate: Coordinate) -> LookupReceiver {
        let gateway = Arc::clone(&self.gateway);
        self.issue(async move { gateway.reverse_lookup(coordinate).await })
    }

    /// Cancels the pending lookup, if any. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel_pending.take() {
            // the lookup may already have completed; nothing to do then
            let _ = cancel.send(());
        }
    }

    fn issue<F>(&mut self, lookup: F) -> LookupReceiver
    where
        F: Future<Output = Result<Vec<Place>, GeocodeError>> + Send + 'static,
    {
        self.cancel();

        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        let (result_tx, result_rx) = oneshot::channel();
        self.cancel_pending = Some(cancel_tx);

        tokio::spawn(async move {
            let outcome = tokio::select! {
                result = lookup => result,
                // fires on an explicit cancel and when the client is dropped
                _ = cancel_rx => {
                    log::debug!("lookup cancelled before completion");
                    Err(GeocodeError::Cancelled)
                }
            };
            // the caller may have stopped listening; that's fine
            let _ = result_tx.send(outcome);
        });

        result_rx
    }
}

impl Drop for LookupClient {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Gateway whose forward lookups hang forever and whose reverse
    /// lookups resolve immediately.
    struct StubGateway;

    fn sf_place() -> Place {
        Place {
            city: Some("San Francisco".to_string()),
            coordinate: Some(Coordinate::new(37.7749, -122.4194)),
            ..Place::default()
        }
    }

    #[async_trait]
    impl GeocodingGateway for StubGateway {
        async fn forward_lookup(
            &self,
            query: &str,
            _bias: Option<&BiasRegion>,
        ) -> Result<Vec<Place>, GeocodeError> {
            if query == "hang" {
                std::future::pending::<()>().await;
            }
            if query.is_empty() {
                return Err(GeocodeError::NoResult);
            }
            Ok(vec![sf_place()])
        }

        async fn reverse_lookup(
            &self,
            _coordinate: Coordinate,
        ) -> Result<Vec<Place>, GeocodeError> {
            Ok(vec![sf_place()])
        }
    }

    #[tokio::test]
    async fn lookup_resolves_with_places() {
        let mut client = LookupClient::new(Arc::new(StubGateway));
        let places = client
            .forward_lookup("san francisco", None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].city.as_deref(), Some("San Francisco"));
    }

    #[tokio::test]
    async fn empty_match_surfaces_as_no_result() {
        let mut client = LookupClient::new(Arc::new(StubGateway));
        let outcome = client.forward_lookup("", None).await.unwrap();
        assert_eq!(outcome, Err(GeocodeError::NoResult));
    }

    #[tokio::test]
    async fn new_lookup_cancels_the_pending_one() {
        let mut client = LookupClient::new(Arc::new(StubGateway));

        let first = client.forward_lookup("hang", None);
        let second = client.reverse_lookup(Coordinate::new(37.7749, -122.4194));

        assert_eq!(first.await.unwrap(), Err(GeocodeError::Cancelled));
        assert!(second.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn explicit_cancel_resolves_pending_lookup() {
        let mut client = LookupClient::new(Arc::new(StubGateway));

        let pending = client.forward_lookup("hang", None);
        client.cancel();
        client.cancel(); // idempotent

        assert_eq!(pending.await.unwrap(), Err(GeocodeError::Cancelled));
    }

    #[tokio::test]
    async fn cancel_with_nothing_pending_is_a_no_op() {
        let mut client = LookupClient::new(Arc::new(StubGateway));
        client.cancel();
    }

    #[tokio::test]
    async fn sequential_lookups_both_complete() {
        let mut client = LookupClient::new(Arc::new(StubGateway));

        let first = client.forward_lookup("a", None).await.unwrap();
        assert!(first.is_ok());

        let second = client.forward_lookup("b", None).await.unwrap();
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn dropping_the_client_cancels_the_pending_lookup() {
        let mut client = LookupClient::new(Arc::new(StubGateway));
        let pending = client.forward_lookup("hang", None);
        drop(client);

        assert_eq!(pending.await.unwrap(), Err(GeocodeError::Cancelled));
    }
}
