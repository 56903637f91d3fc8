use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from(e)
    }
}

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(UserError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(|e| match e {
            FrameworkError::NotFound(_) => UserError::NotFound(id),
            other => UserError::from(other),
        })
    }
}
