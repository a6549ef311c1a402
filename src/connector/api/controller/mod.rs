pub mod explain_controller;

pub use explain_controller::ExplainController;
