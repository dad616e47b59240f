pub mod download_definitions;
