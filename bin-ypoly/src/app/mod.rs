#[allow(clippy::module_inception)]
mod app;
mod cmd;
mod err;
mod utils;

pub use app::App;
