pub mod generator;
pub mod pipeline;
pub mod preview;
pub mod scene;
pub mod store;
pub mod template;
pub mod text;
