use crate::error::CleanError;
use crate::models::AppConfig;
use crate::rendering::write_grayscale_png;
use crate::services::raw_reader::read_raw;
use speck_removal::{
    mask_to_image, tone_map, Dims, Image16, Image8, SpeckRemoval, SpeckRemover,
};
use std::path::PathBuf;

/// Where to read the raw plane and where to put each output
#[derive(Debug, Clone, Default)]
pub struct CleanRequest {
    /// Raw 16-bit plane
    pub input: PathBuf,
    /// PNG of the repaired image
    pub output: PathBuf,
    /// Optional PNG of the untouched input, same tone mapping
    pub raw_output: Option<PathBuf>,
    /// Optional PNG of the speck mask (specks white)
    pub mask_output: Option<PathBuf>,
}

/// What a pipeline run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanSummary {
    pub dims: Dims,
    pub specks: usize,
    pub degenerate: usize,
}

/// In-memory result of [`CleanPipeline::clean`]
#[derive(Debug, Clone)]
pub struct CleanedImage {
    pub removal: SpeckRemoval,
    /// Tone-mapped repaired image
    pub display: Image8,
}

/// Reads a raw plane, removes specks, tone maps and writes PNGs
///
/// The kernel is built once when the pipeline is created and reused for
/// every image it processes.
pub struct CleanPipeline {
    config: AppConfig,
    remover: SpeckRemover,
}

impl CleanPipeline {
    pub fn new(config: AppConfig) -> Result<Self, CleanError> {
        let remover = SpeckRemover::with_kernel_size(config.kernel_size)?
            .normalization(config.normalization)
            .degenerate_policy(config.degenerate);
        remover.options().validate()?;
        tracing::debug!(
            kernel_size = config.kernel_size,
            normalization = config.normalization,
            degenerate = %config.degenerate,
            "Speck remover initialized"
        );
        Ok(Self { config, remover })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Remove specks from an in-memory image and tone map the result
    pub fn clean(&self, raw: Image16) -> Result<CleanedImage, CleanError> {
        let removal = self.remover.process(raw)?;
        if removal.degenerate > 0 {
            tracing::warn!(
                degenerate = removal.degenerate,
                "Specks without clean neighbors kept their raw value"
            );
        }
        let display = tone_map(&removal.repaired, self.config.visualization);
        Ok(CleanedImage { removal, display })
    }

    /// Run the whole file-to-file pipeline
    pub fn run(&self, request: &CleanRequest) -> Result<CleanSummary, CleanError> {
        let dims = self.config.dims()?;
        let raw = read_raw(&request.input, dims, self.config.byte_order)?;

        let cleaned = self.clean(raw)?;
        let removal = &cleaned.removal;
        tracing::info!(
            input = %request.input.display(),
            %dims,
            specks = removal.speck_count(),
            degenerate = removal.degenerate,
            "Removed specks"
        );

        let optimize = self.config.optimize_png;
        write_grayscale_png(&request.output, &cleaned.display, optimize)?;
        if let Some(path) = &request.raw_output {
            let raw_display = tone_map(&removal.raw, self.config.visualization);
            write_grayscale_png(path, &raw_display, optimize)?;
        }
        if let Some(path) = &request.mask_output {
            write_grayscale_png(path, &mask_to_image(&removal.mask), optimize)?;
        }

        Ok(CleanSummary {
            dims,
            specks: removal.speck_count(),
            degenerate: removal.degenerate,
        })
    }
}
