//! # Order Ledger
//!
//! > **Order placement and stock accounting on resource-oriented actors.**
//!
//! Every resource (users, products, orders) is owned by one actor that processes its
//! requests sequentially. Stock lives on the product records and moves only through the
//! ledger actions `TryDecrement` and `Increment`, so it can never go negative and a
//! decrement is never restored twice.
//!
//! ## 🚀 Core Concepts
//!
//! ### Actors own records
//! A [`ResourceActor<T>`](framework::ResourceActor) holds an arena of `T` keyed by integer
//! ids. Callers hold a cloneable [`ResourceClient<T>`](framework::ResourceClient) and only
//! ever receive clones, so nothing outside the actor can mutate a record.
//!
//! ### Units of work
//! [`Unit`](framework::Unit) batches several actions against one actor. The actor applies
//! them to staged copies and publishes all of them or none. Placing an order reserves
//! every line in one unit; cancelling restocks every line in one unit.
//!
//! ### Workflows run inside the order actor
//! Placement runs in the order's create hook and cancellation runs as an order action.
//! A caller that stops waiting cannot interrupt either of them, and an order is only
//! ever inserted fully priced.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`]: the generic actor, client, unit of work and mocks.
//! - [`model`]: plain data ([`User`](model::User), [`Product`](model::Product),
//!   [`Order`](model::Order), [`Page`](model::Page)).
//! - [`user_actor`], [`inventory_actor`], [`order_actor`]: the entity implementations,
//!   their actions and their errors.
//! - [`clients`]: typed wrappers; [`OrderClient`](clients::OrderClient) is the entry
//!   point for `create_order`, `get_order`, `list_orders` and `cancel_order`.
//! - [`lifecycle`]: [`OrderSystem`](lifecycle::OrderSystem), configuration and tracing
//!   setup.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod user_actor;
