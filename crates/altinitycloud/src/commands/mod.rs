pub mod node_types;
pub mod users;
