pub mod record;

pub use record::{CompletedQuestion, FinalRecord, QuestionDraft, RawQuestionRow};
