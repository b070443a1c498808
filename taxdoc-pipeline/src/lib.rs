//! Document-side glue around the tax calculation core.
//!
//! The external document-understanding service classifies uploaded PDFs
//! and returns structured figures; everything in this crate runs after
//! that: the wire model for extracted documents, the extractor trait
//! seam, aggregation into income totals, the end-to-end estimate
//! pipeline, and a plain-text Form 1040 facsimile.

pub mod aggregate;
pub mod document;
pub mod extract;
pub mod form;
pub mod pipeline;

pub use aggregate::aggregate_documents;
pub use document::ExtractedDocument;
pub use extract::{DocumentExtractor, ExtractError, FixtureExtractor};
pub use form::{render_form_1040, TaxpayerInfo};
pub use pipeline::{EstimatePipeline, EstimateReport, PipelineError};
