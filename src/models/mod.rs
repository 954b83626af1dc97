// Domain models shared by the REST clients, the store and the renderers

mod container;
mod node;

pub use container::{ActionKind, ActionResult, Container, ContainerAction, ContainerStatus};
pub use node::{ConnectionTest, MessageResponse, NodeForm, NodeRole, NodeStatus, Server};
