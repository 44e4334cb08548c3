mod csrsync_workflow;

pub use csrsync_workflow::CsrsyncWorkflow;
