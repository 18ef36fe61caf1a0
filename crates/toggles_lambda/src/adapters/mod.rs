pub mod parameter_store;
pub mod ssm;
