//! Engine module: fingerprinting, path tools and the CLI surface

pub mod arg_parser;
pub mod cli;
pub mod fingerprint;
pub mod tools;

pub use arg_parser::Cli;
pub use cli::handle_run;
pub use fingerprint::{
    FINGERPRINT_HEX_LEN, fingerprint, is_target_name, target_file_name, target_path,
};
pub use tools::{check_root_and_canonicalize, display_path, path_relative_to};
