pub mod components;
pub mod layouts;
pub mod pages;
pub mod routes;

pub use routes::{App, Route, RouteEntry, ROUTE_TABLE, resolve};
