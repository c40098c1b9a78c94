use crate::sampler::SamplerConfig;

#[derive(Clone)]
pub struct AppState {
    pub sampler: SamplerConfig,
}

impl AppState {
    pub fn new(sampler: SamplerConfig) -> Self {
        Self { sampler }
    }
}
