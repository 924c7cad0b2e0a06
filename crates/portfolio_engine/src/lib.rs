//! Portfolio engine: contact submission and static site output.
mod digest;
mod engine;
mod persist;
mod site;
mod submit;
mod types;

pub use digest::short_digest;
pub use engine::EngineHandle;
pub use persist::{ensure_output_dir, AtomicFileWriter, WriteError};
pub use site::{page_file, write_site, ExportError, PageKind, RenderedPage, SiteOptions, SiteSummary};
pub use submit::{build_submitter, ReqwestSubmitter, SimulatedSubmitter, SubmitSettings, Submitter};
pub use types::{
    ContactMessage, EngineEvent, FailureKind, SubmissionId, SubmitError, SubmitReceipt,
};
pub use tokio_util::sync::CancellationToken;
