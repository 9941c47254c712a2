mod citizen_dto;

pub use citizen_dto::{
    CitizenResponseDto, RegisterCitizenDto, ReportProblemDto, SendOtpDto, VerifyOtpDto,
};
