//! # Generic Actor Server
//!
//! `ResourceActor` owns the records of one entity type and processes requests for them
//! sequentially. Because only the actor task ever touches the store, every request it
//! handles is linearizable with respect to every other request for the same entity type.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::{FrameworkError, UnitError};
use crate::framework::message::{ResourceRequest, UnitOutcome};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. The store is an arena of records keyed by the
/// entity's integer-backed ID; callers only ever see clones.
///
/// # Operations
///
/// * **Create**: allocate the next ID, build the entity with `from_create_params`, run
///   `on_create`, insert, and reply with the id and the record exactly as inserted. A
///   failing hook means nothing is inserted.
/// * **Get / List**: return clones, never references.
/// * **Update**: run `on_update` on the stored record.
/// * **Delete**: run `on_delete`, then remove.
/// * **Action**: run `handle_action` on a staged copy; the copy replaces the record only
///   when the action succeeds.
/// * **Commit**: run every staged step of a unit on staged copies; the copies replace the
///   records only when every step succeeds.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    /// `None` once `u32::MAX` has been handed out.
    next_id: Option<u32>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the mailbox. When it is full, client calls wait
    /// for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: Some(1),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // "Product" instead of "order_ledger::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(raw) = self.next_id else {
                        warn!(entity_type, "Create failed: ids exhausted");
                        let _ = respond_to.send(Err(FrameworkError::IdsExhausted));
                        continue;
                    };
                    self.next_id = raw.checked_add(1);
                    let id = T::Id::from(raw);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok((id, item)));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List {
                    offset,
                    limit,
                    respond_to,
                } => {
                    let total = self.store.len();
                    let page: Vec<T> = self.store.values().skip(offset).take(limit).cloned().collect();
                    debug!(entity_type, offset, limit, returned = page.len(), total, "List");
                    let _ = respond_to.send(Ok((page, total)));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut staged = current.clone();
                    match staged.handle_action(action, &context).await {
                        Ok(result) => {
                            self.store.insert(id.clone(), staged);
                            info!(entity_type, %id, "Action ok");
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Commit { steps, respond_to } => {
                    let count = steps.len();
                    debug!(entity_type, steps = count, ?steps, "Commit");
                    let outcome = self.apply_unit(steps, &context).await;
                    match &outcome {
                        Ok(_) => info!(entity_type, steps = count, "Unit committed"),
                        Err(e) => warn!(entity_type, steps = count, error = %e, "Unit aborted"),
                    }
                    let _ = respond_to.send(outcome);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Applies the steps of a unit in order against staged copies of the touched records.
    ///
    /// Later steps on the same record see the effects of earlier steps. The store is only
    /// written once every step has succeeded.
    async fn apply_unit(
        &mut self,
        steps: Vec<(T::Id, T::Action)>,
        context: &T::Context,
    ) -> UnitOutcome<T> {
        let mut staged: BTreeMap<T::Id, T> = BTreeMap::new();
        let mut results = Vec::with_capacity(steps.len());

        for (step, (id, action)) in steps.into_iter().enumerate() {
            let item = match staged.entry(id.clone()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => match self.store.get(&id) {
                    Some(current) => entry.insert(current.clone()),
                    None => return Err(UnitError::NotFound { step, id }),
                },
            };
            match item.handle_action(action, context).await {
                Ok(result) => results.push(result),
                Err(source) => return Err(UnitError::Rejected { step, id, source }),
            }
        }

        self.store.extend(staged);
        Ok(results)
    }
}
