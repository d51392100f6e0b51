pub use self::asset::*;
pub use self::build_mode::*;
pub use self::bundle::*;
pub use self::bundle_group::*;
pub use self::diagnostic::*;
pub use self::file_type::*;
pub use self::source::*;
pub use self::target::*;

mod asset;
mod build_mode;
mod bundle;
mod bundle_group;
mod diagnostic;
mod file_type;
mod source;
mod target;
