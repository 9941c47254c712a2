mod authority_dto;

pub use authority_dto::{AuthorityLoginDto, AuthorityResponseDto, RegisterAuthorityDto};
