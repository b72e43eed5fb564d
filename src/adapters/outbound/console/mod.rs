/// Console adapters for presenting command results
mod stdout_presenter;

pub use stdout_presenter::{render_json, StdoutPresenter};
