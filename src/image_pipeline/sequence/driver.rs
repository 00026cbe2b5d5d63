use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{debug_span, error, info, instrument};

use crate::image_pipeline::{
    common::error::{MatchError, Result},
    frame::{FrameReader, FrameWriter, ImageCodec},
    matching::{CumulativeHistogram, Histogram, Lut},
    sequence::{
        config::SequenceConfig,
        naming::FrameNaming,
        summary::{FrameFailure, RunSummary},
    },
};

pub struct SequenceDriver<R: FrameReader, W: FrameWriter> {
    reader: R,
    writer: W,
    config: SequenceConfig,
}

impl SequenceDriver<ImageCodec, ImageCodec> {
    /// Validates `config` and reads/writes frames through the `image` crate.
    pub fn new(config: SequenceConfig) -> Result<Self> {
        Self::with_custom(ImageCodec, ImageCodec, config)
    }
}

impl<R: FrameReader, W: FrameWriter> SequenceDriver<R, W> {
    pub fn with_custom(reader: R, writer: W, config: SequenceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            writer,
            config,
        })
    }

    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    /// Matches every frame of the sequence against the start frame.
    ///
    /// The start frame is written unchanged. Remaining frames are processed
    /// on a bounded worker pool; a frame that fails is logged and left out
    /// of the output, and the run carries on with the others.
    ///
    /// # Returns
    ///
    /// * `Ok(RunSummary)` - Written and failed frame indices
    /// * `Err(MatchError)` - The output directory is missing, or the
    ///   reference frame could not be loaded or written
    #[instrument(skip(self), fields(start = self.config.start_frame, count = self.config.frame_count))]
    pub fn run(&self) -> Result<RunSummary> {
        self.check_output_dir()?;

        let naming = self.config.naming();
        let reference = self.initialize(&naming)?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads.unwrap_or(0))
            .thread_name(|i| format!("frame-worker-{}", i))
            .build()
            .map_err(|e| MatchError::WorkerPoolError(e.to_string()))?;

        let outcomes: Vec<(usize, Result<PathBuf>)> = pool.install(|| {
            self.config
                .frame_indices()
                .into_par_iter()
                .skip(1)
                .map(|index| (index, self.process_frame(index, &naming, &reference)))
                .collect()
        });

        let mut summary = RunSummary {
            written: vec![self.config.start_frame],
            failed: Vec::new(),
        };
        for (index, outcome) in outcomes {
            match outcome {
                Ok(_) => summary.written.push(index),
                Err(error) => summary.failed.push(FrameFailure { index, error }),
            }
        }

        info!(
            written = summary.written.len(),
            failed = summary.failed.len(),
            "Sequence complete"
        );
        Ok(summary)
    }

    fn check_output_dir(&self) -> Result<()> {
        if !self.config.output_dir.is_dir() {
            return Err(MatchError::MissingOutputDirectory(
                self.config.output_dir.display().to_string(),
            ));
        }
        Ok(())
    }

    /// Loads the start frame, stores it unchanged and returns its distribution.
    fn initialize(&self, naming: &FrameNaming) -> Result<CumulativeHistogram> {
        let file_name = naming.file_name(self.config.start_frame)?;
        let input = self.config.input_path(&file_name);
        info!(file = %input.display(), "Loading reference frame");

        let frame = self
            .reader
            .read_frame(&input)
            .map_err(|e| MatchError::ReferenceLoadError(e.to_string()))?;

        let reference = CumulativeHistogram::from_frame(&frame).map_err(|e| {
            MatchError::ReferenceLoadError(format!("{}: {}", input.display(), e))
        })?;

        self.writer
            .write_frame(&frame, &self.config.output_path(&file_name))?;

        Ok(reference)
    }

    fn process_frame(
        &self,
        index: usize,
        naming: &FrameNaming,
        reference: &CumulativeHistogram,
    ) -> Result<PathBuf> {
        info!("Processing frame: {}", index);

        let outcome = self.match_frame(index, naming, reference);
        if let Err(e) = &outcome {
            error!(frame = index, "{}", e);
        }
        outcome
    }

    fn match_frame(
        &self,
        index: usize,
        naming: &FrameNaming,
        reference: &CumulativeHistogram,
    ) -> Result<PathBuf> {
        let file_name = naming.file_name(index)?;
        let input = self.config.input_path(&file_name);

        let frame = {
            let _span = debug_span!("load_frame", index).entered();
            self.reader
                .read_frame(&input)
                .map_err(|e| MatchError::FrameLoadError(e.to_string()))?
        };

        let source = {
            let _span = debug_span!("histogram", width = frame.width, height = frame.height).entered();
            Histogram::from_frame(&frame)
                .map_err(|e| MatchError::FrameLoadError(format!("{}: {}", input.display(), e)))?
                .cumulative()
        };

        let lut = {
            let _span = debug_span!("build_lut").entered();
            Lut::matching(&source, reference)
        };

        let matched = {
            let _span = debug_span!("apply_lut").entered();
            lut.apply(&frame)
        };

        let output = self.config.output_path(&file_name);
        {
            let _span = debug_span!("store_frame").entered();
            self.writer.write_frame(&matched, &output)?;
        }

        Ok(output)
    }
}
