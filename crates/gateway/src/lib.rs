#![forbid(unsafe_code)]

pub mod http;
pub mod repository;

pub use http::HttpGateway;
pub use repository::{
    ContentRepository, Gateway, GatewayError, InMemoryGateway, ProgressRepository,
    QuestionRepository, ReportGateway,
};
