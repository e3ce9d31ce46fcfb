pub mod bindings;
pub mod handler;
pub mod matcher;
pub mod parser;
pub mod response;
pub mod template;
pub mod viewpoint;
