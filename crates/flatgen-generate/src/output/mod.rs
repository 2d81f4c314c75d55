pub mod pipe;

pub use pipe::PipeEncoder;
