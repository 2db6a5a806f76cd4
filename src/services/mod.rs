// Service exports
pub mod readings;
pub mod tarot;

pub use readings::{ReadingError, ReadingRegistry, ReadingSession};
pub use tarot::{RemoteCard, RemoteReading, TarotClient, TarotError, TarotReading, READING_SIZE};
