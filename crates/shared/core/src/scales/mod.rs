mod pair;
mod registry;
mod spec;
mod step;

pub use pair::PairScales;
pub use registry::ScaleRegistry;
pub use spec::ScaleSpec;
pub use step::StepSpec;
