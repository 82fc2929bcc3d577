//! Test doubles for exercising clients in isolation.
//!
//! Instead of spinning up a full [`RegistryActor`] when only the client
//! logic is under test, [`create_mock_handle`] yields a handle whose
//! requests land on a channel the test controls. The `expect_*` helpers
//! assert on the next request and hand back its responder, so the test
//! can script the registry's behavior deterministically.
//!
//! [`RegistryActor`]: crate::registry::RegistryActor

use tokio::sync::mpsc;

use crate::registry::{Entity, EntityId, RegistryHandle, RegistryRequest, Reply};

/// Create a handle and the receiver its requests arrive on.
pub fn create_mock_handle<T: Entity>(
    buffer_size: usize,
) -> (RegistryHandle<T>, mpsc::Receiver<RegistryRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RegistryHandle::new(sender), receiver)
}

/// Assert the next request is a Create and return its payload and
/// responder.
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<RegistryRequest<T>>,
) -> Option<(T::CreateParams, Reply<EntityId>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Assert the next request is a Get and return the id and responder.
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<RegistryRequest<T>>,
) -> Option<(EntityId, Reply<Option<T>>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Assert the next request is an Action and return id, action, and
/// responder.
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<RegistryRequest<T>>,
) -> Option<(EntityId, T::Action, Reply<T::ActionResult>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Assert the next request is a Delete and return the id and responder.
pub async fn expect_delete<T: Entity>(
    receiver: &mut mpsc::Receiver<RegistryRequest<T>>,
) -> Option<(EntityId, Reply<()>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer_actor::CustomerCreate;
    use crate::domain::Customer;

    #[tokio::test]
    async fn mock_handle_scripts_create_responses() {
        let (handle, mut receiver) = create_mock_handle::<Customer>(8);

        let create_task = tokio::spawn(async move {
            handle
                .create(CustomerCreate {
                    name: "Alice".into(),
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name, "Alice");
        responder.send(Ok(1)).unwrap();

        assert_eq!(create_task.await.unwrap(), Ok(1));
    }
}
