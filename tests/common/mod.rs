pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use packslip::{PackingSlipBuilder, PipelineError, SlipConfig};
use packslip::types::Shipment;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of a single page (1-based).
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    pub fn text(&self) -> String {
        pdf_assertions::extract_text(&self.doc)
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Generate slips with default settings and no media
pub fn generate(shipments: Vec<Shipment>) -> Result<GeneratedPdf, PipelineError> {
    generate_with_config(shipments, SlipConfig::default())
}

pub fn generate_with_config(
    shipments: Vec<Shipment>,
    config: SlipConfig,
) -> Result<GeneratedPdf, PipelineError> {
    init_logger();
    let generator = PackingSlipBuilder::new().with_config(config).build()?;
    let bytes = generator.generate_to_vec(shipments)?;
    GeneratedPdf::from_bytes(bytes).map_err(|e| PipelineError::Config(e.to_string()))
}
