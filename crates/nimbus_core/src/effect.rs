use crate::state::GenerationRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Generate { request: GenerationRequest },
}
