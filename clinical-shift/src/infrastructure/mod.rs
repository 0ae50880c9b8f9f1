pub mod config_repo;
