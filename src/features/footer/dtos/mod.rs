mod footer_dto;

pub use footer_dto::{FooterResponseDto, UpdateFooterDto};
