mod evaluate_gate;
mod mark_step;

pub use evaluate_gate::EvaluateSetupGate;
pub use mark_step::MarkSetupStep;
