//! Resume pipeline: the static data store and the format-dispatching
//! endpoint. Rendering itself lives in `layout`.

pub mod data;
pub mod handlers;
pub mod models;
