mod authority_service;

pub use authority_service::AuthorityService;
