mod footer_service;

pub use footer_service::FooterService;
