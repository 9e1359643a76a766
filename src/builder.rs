use crate::config::SlipConfig;
use crate::error::PipelineError;
use log::{debug, info};
use packslip_core::{Collaborators, ShipmentSlipRenderer, StoreEmulation};
use packslip_render_lopdf::LopdfCanvas;
use packslip_resource::{FilesystemResourceProvider, InMemoryResourceProvider};
use packslip_source::{
    InMemoryCustomerGroupRepository, InMemoryOrderItemRepository, ShipmentSource,
    VecShipmentSource, load_shipments,
};
use packslip_traits::ResourceProvider;
use packslip_types::Shipment;
use std::fs;
use std::io::{self, BufReader, BufWriter, Seek, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const DEFAULT_TITLE: &str = "Pakbonnen";

/// A builder for creating a [`PackingSlipGenerator`].
pub struct PackingSlipBuilder {
    config: SlipConfig,
    media: Option<Box<dyn ResourceProvider>>,
    media_dir: Option<PathBuf>,
    title: String,
}

impl Default for PackingSlipBuilder {
    fn default() -> Self {
        Self {
            config: SlipConfig::default(),
            media: None,
            media_dir: None,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl PackingSlipBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: SlipConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = SlipConfig::from_file(path)?;
        Ok(self)
    }

    /// Resolves logos against the platform's media directory.
    pub fn with_media_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.media_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Uses `provider` for logos instead of a media directory.
    pub fn with_media_provider(mut self, provider: impl ResourceProvider + 'static) -> Self {
        self.media = Some(Box::new(provider));
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn build(self) -> Result<PackingSlipGenerator, PipelineError> {
        let media: Box<dyn ResourceProvider> = match (self.media, self.media_dir) {
            (Some(provider), _) => provider,
            (None, Some(dir)) => {
                if !dir.is_dir() {
                    return Err(PipelineError::Config(format!(
                        "Media directory '{}' does not exist",
                        dir.display()
                    )));
                }
                Box::new(FilesystemResourceProvider::new(dir))
            }
            (None, None) => Box::new(InMemoryResourceProvider::new()),
        };
        debug!("Using {} media provider", media.name());

        let groups = self
            .config
            .customer_groups
            .iter()
            .map(|(id, code)| (*id, code.clone()))
            .collect();

        Ok(PackingSlipGenerator {
            config: self.config,
            groups,
            media,
            title: self.title,
        })
    }
}

/// Turns shipments into a packing-slip PDF.
pub struct PackingSlipGenerator {
    config: SlipConfig,
    groups: InMemoryCustomerGroupRepository,
    media: Box<dyn ResourceProvider>,
    title: String,
}

impl PackingSlipGenerator {
    pub fn config(&self) -> &SlipConfig {
        &self.config
    }

    /// Writes one page per shipment to `writer` and returns the sink with the
    /// page count.
    pub fn generate<W, S>(&self, mut source: S, writer: W) -> Result<(W, usize), PipelineError>
    where
        W: Write + Seek,
        S: ShipmentSource,
    {
        if let Some(total) = source.size_hint() {
            info!("Generating {} packing slip(s)", total);
        }

        let environment = StoreEmulation::new();
        let mut canvas = LopdfCanvas::new(writer)?.with_title(&self.title);
        let mut pages = 0;

        while let Some(shipment) = source.next() {
            let items = InMemoryOrderItemRepository::from_shipments([&shipment]);
            let renderer = ShipmentSlipRenderer::new(
                self.config.options.clone(),
                Collaborators {
                    items: &items,
                    groups: &self.groups,
                    scope: &self.config.scope,
                    environment: &environment,
                    media: &*self.media,
                },
            );
            renderer.render_shipment(&shipment, &mut canvas)?;
            pages += 1;
        }

        let writer = canvas.finish()?;
        debug!("Wrote {} page(s)", pages);
        Ok((writer, pages))
    }

    pub fn generate_to_vec(&self, shipments: Vec<Shipment>) -> Result<Vec<u8>, PipelineError> {
        let (cursor, _) = self.generate(
            VecShipmentSource::new(shipments),
            io::Cursor::new(Vec::new()),
        )?;
        Ok(cursor.into_inner())
    }

    /// Writes the slips to `path`. The document is rendered into a temporary
    /// file next to `path` and only moved into place once it is complete, so
    /// a failed run leaves no partial PDF behind.
    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        shipments: Vec<Shipment>,
        path: P,
    ) -> Result<usize, PipelineError> {
        let output_path = path.as_ref();
        let parent_dir = match output_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let staging = NamedTempFile::new_in(parent_dir)?;
        let (writer, pages) =
            self.generate(VecShipmentSource::new(shipments), BufWriter::new(staging))?;
        let staging = writer.into_inner().map_err(|e| e.into_error())?;
        staging.persist(output_path).map_err(|e| e.error)?;
        debug!("Saved {}", output_path.display());
        Ok(pages)
    }

    /// Reads a shipment export and writes the slips to `output`.
    pub fn generate_from_json_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<usize, PipelineError> {
        let input = input.as_ref();
        let file = fs::File::open(input).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read shipments from '{}': {}", input.display(), e),
            ))
        })?;
        let shipments = load_shipments(BufReader::new(file))?;
        self.generate_to_file(shipments, output)
    }
}
