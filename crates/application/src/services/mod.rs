//! Application services - Use case implementations

mod response_composer;
mod weather_chat_service;
mod weather_service;

pub use response_composer::ResponseComposer;
pub use weather_chat_service::{ChatAnswer, WeatherChatService};
pub use weather_service::WeatherService;
