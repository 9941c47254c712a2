//! Session authentication for the two identity spaces.
//!
//! Citizens log in by verifying a one-time code, authorities with
//! credentials; both receive a signed bearer token whose payload is bound to
//! exactly one identity kind. The guards in this module keep the two spaces
//! separate: a citizen token never authorizes an authority endpoint, and
//! vice versa.

pub mod dtos;
pub mod guards;
pub mod model;
pub mod services;
