//! A namer plugin that names bundles after their entry assets and removes the content hash from
//! the resulting file names.
//!
//! Configuration lives under the `parcel-namer-hashless` key of the package.json in the working
//! directory:
//!
//! ```json
//! {
//!   "parcel-namer-hashless": {
//!     "mode": "all",
//!     "include": ["\\.js$"],
//!     "exclude": ["/vendor/"]
//!   }
//! }
//! ```

pub use hash_stripper::HashStripper;
pub use hashless_config::HashPolicy;
pub use hashless_config::HashlessConfig;
pub use hashless_config::StripMode;
pub use hashless_namer::HashlessNamer;
pub use name_from_content::name_from_content;
pub use namer_error::NamerError;

mod hash_stripper;
mod hashless_config;
mod hashless_namer;
mod name_from_content;
mod namer_error;
