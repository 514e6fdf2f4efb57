mod base;
pub mod quick;

pub use base::{
    ExerciseFacts, NutritionFacts, RecoveryFacts, TRAINING_KNOWLEDGE, TrainingKnowledge,
    analysis_summary, answer, general_advice, setup_fallback,
};
pub use quick::{QUICK_RESPONSES, QuickResponse};
