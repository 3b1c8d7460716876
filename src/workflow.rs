//! Workflow stage machine
//!
//! The client walks a linear pipeline: upload -> preprocessing -> review ->
//! ocr -> results. The only non-linear moves are the explicit "back to
//! upload" escape from review and the failure fallbacks below.

/// One discrete phase of the scanning workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Upload,
    Preprocessing,
    Review,
    Ocr,
    Results,
}

impl WorkflowStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStage::Upload => "upload",
            WorkflowStage::Preprocessing => "preprocessing",
            WorkflowStage::Review => "review",
            WorkflowStage::Ocr => "ocr",
            WorkflowStage::Results => "results",
        }
    }

    /// Stage to return to when the network call issued from this stage
    /// fails. Both in-flight stages fall back to the last stable stage;
    /// stable stages fall back to themselves.
    pub fn failure_fallback(&self) -> WorkflowStage {
        match self {
            WorkflowStage::Preprocessing => WorkflowStage::Upload,
            WorkflowStage::Ocr => WorkflowStage::Review,
            other => *other,
        }
    }
}

impl Default for WorkflowStage {
    fn default() -> Self {
        WorkflowStage::Upload
    }
}

/// Stage entered when the pending batch is submitted, or `None` when the
/// batch is empty: no request is issued and the stage is left untouched.
pub fn submit_stage(batch_len: usize) -> Option<WorkflowStage> {
    if batch_len == 0 {
        None
    } else {
        Some(WorkflowStage::Preprocessing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocessing_failure_reverts_to_upload() {
        assert_eq!(
            WorkflowStage::Preprocessing.failure_fallback(),
            WorkflowStage::Upload
        );
    }

    #[test]
    fn test_ocr_failure_reverts_to_review() {
        assert_eq!(WorkflowStage::Ocr.failure_fallback(), WorkflowStage::Review);
    }

    #[test]
    fn test_stable_stages_fall_back_to_themselves() {
        for stage in [
            WorkflowStage::Upload,
            WorkflowStage::Review,
            WorkflowStage::Results,
        ] {
            assert_eq!(stage.failure_fallback(), stage);
        }
    }

    #[test]
    fn test_as_str() {
        assert_eq!(WorkflowStage::Upload.as_str(), "upload");
        assert_eq!(WorkflowStage::Preprocessing.as_str(), "preprocessing");
        assert_eq!(WorkflowStage::Review.as_str(), "review");
        assert_eq!(WorkflowStage::Ocr.as_str(), "ocr");
        assert_eq!(WorkflowStage::Results.as_str(), "results");
    }

    #[test]
    fn test_default_is_upload() {
        assert_eq!(WorkflowStage::default(), WorkflowStage::Upload);
    }

    #[test]
    fn test_submit_with_empty_batch_is_noop() {
        assert_eq!(submit_stage(0), None);
    }

    #[test]
    fn test_submit_with_files_enters_preprocessing() {
        assert_eq!(submit_stage(1), Some(WorkflowStage::Preprocessing));
        assert_eq!(submit_stage(3), Some(WorkflowStage::Preprocessing));
    }
}
