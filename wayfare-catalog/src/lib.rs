pub mod service;
pub mod validate;

pub use service::PackageService;
pub use validate::PackageDraft;
