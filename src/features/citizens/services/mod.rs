mod citizen_service;

pub use citizen_service::CitizenService;
