pub mod branches;
pub mod checkout;
pub mod config;
pub mod dispatcher;
pub mod dropdown;
pub mod git;
pub mod labels;
pub mod path_text;
pub mod pull_request;
pub mod repository;
pub mod state;
