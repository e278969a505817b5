pub mod environment;
pub mod paths;

pub use environment::{env_csv, env_path};
pub use paths::{
    file_name_lossy, has_extension, lowercase_extension, modified_secs, path_components,
    relative_to, to_slash_path,
};
