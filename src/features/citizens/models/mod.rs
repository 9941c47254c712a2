mod citizen;

pub use citizen::Citizen;
