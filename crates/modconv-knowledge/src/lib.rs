//! modconv Knowledge Base
//!
//! What the converter knows about code it does not own:
//!
//! - `std_module` - The standard headers and the workaround `std` module
//! - `std_tables` - Curated `using` tables per standard header
//! - `third_party` - Mapping of include texts to external modules

pub mod std_module;
pub mod std_tables;
pub mod third_party;

pub use std_module::{is_std_header, StdModuleGenerator, STD_HEADERS, STD_MODULE_NAME};
pub use std_tables::std_header_body;
pub use third_party::{ThirdPartyMatch, ThirdPartyModules};
