//! Lugia Packager - Assemble the publishable contract artifact bundle.

pub mod archive;
pub mod discovery;
pub mod fsops;
pub mod layout;
pub mod packager;
pub mod report;

pub use discovery::PackageEntry;
pub use layout::PackLayout;
pub use packager::Packager;
pub use report::{ArchiveInfo, PackReport, PackageReport};
