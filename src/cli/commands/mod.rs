//! One file per subcommand; each handler reports its own errors and returns
//! the process exit code.

mod log;
mod path;
mod rotate;
mod stats;
mod sweep;

pub use log::cmd_log;
pub use path::cmd_path;
pub use rotate::cmd_rotate;
pub use stats::cmd_stats;
pub use sweep::cmd_sweep;
