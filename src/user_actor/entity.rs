//! [`ActorEntity`] implementation for [`User`].

use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;

fn validate(name: &str, email: &str) -> Result<(), UserError> {
    if name.trim().is_empty() {
        return Err(UserError::ValidationError("name must not be empty".into()));
    }
    if !email.contains('@') {
        return Err(UserError::ValidationError(format!("invalid email: {}", email)));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        validate(&params.name, &params.email)?;
        Ok(Self::new(id, params.name, params.email))
    }

    /// Applies the provided fields; a rejected update leaves the user unchanged.
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        let name = update.name.unwrap_or_else(|| self.name.clone());
        let email = update.email.unwrap_or_else(|| self.email.clone());
        validate(&name, &email)?;
        self.name = name;
        self.email = email;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
