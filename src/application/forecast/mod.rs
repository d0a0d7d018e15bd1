pub mod model;
pub mod onnx_model;
pub mod pipeline;
pub mod scaler;
pub mod smartcore_model;

pub use model::{ForecastModel, ScalingTransform};
pub use pipeline::ForecastPipeline;
