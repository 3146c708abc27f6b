//! CLI command implementations.

mod build;
mod init;

pub use build::build_site;
pub use init::init_project;

use include_dir::{include_dir, Dir};

// Embed the default stylesheet and favicon at compile time so they're
// available after cargo install.
pub(crate) static STATIC_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");
