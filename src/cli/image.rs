//! `image compress|resize|convert` batch commands.
//!
//! Inputs are validated up front, then processed concurrently on a tokio
//! runtime with a single progress line. Failures are reported per file and
//! do not stop the batch.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tokio::task::JoinSet;
use toolforge::config::ToolConfig;
use toolforge::image::{
    ImageFile, ImageFormatKind, compress_image, convert_image, format_file_size, resize_image,
    validate_image_file,
};
use toolforge::logger::{self, ProgressLine};
use toolforge::utils::plural::plural_count;
use toolforge::{debug, log};

use super::args::{ImageBatchArgs, ImageCommand};
use super::common::output_path;

/// One operation applied to every file of a batch.
#[derive(Debug, Clone, Copy)]
enum Job {
    Compress {
        quality: f32,
    },
    Resize {
        width: Option<u32>,
        height: Option<u32>,
        maintain_aspect: bool,
    },
    Convert {
        to: ImageFormatKind,
    },
}

/// A processed file.
struct Outcome {
    output: PathBuf,
    detail: String,
}

impl Job {
    fn from_command(action: &ImageCommand, config: &ToolConfig) -> Result<(Self, ImageBatchArgs)> {
        let job = match action {
            ImageCommand::Compress { batch, quality } => (
                Self::Compress {
                    quality: quality.unwrap_or(config.image.quality),
                },
                batch.clone(),
            ),
            ImageCommand::Resize {
                batch,
                width,
                height,
                keep_aspect,
            } => {
                if width.is_none() && height.is_none() {
                    bail!("resize needs --width, --height or both");
                }
                (
                    Self::Resize {
                        width: *width,
                        height: *height,
                        maintain_aspect: keep_aspect.unwrap_or(config.image.maintain_aspect),
                    },
                    batch.clone(),
                )
            }
            ImageCommand::Convert { batch, to } => (Self::Convert { to: *to }, batch.clone()),
        };
        Ok(job)
    }

    /// Counter name on the progress line.
    const fn label(self) -> &'static str {
        match self {
            Self::Compress { .. } => "compress",
            Self::Resize { .. } => "resize",
            Self::Convert { .. } => "convert",
        }
    }

    /// Where the result of processing `input` is written.
    fn output_for(self, input: &Path, file: &ImageFile, output_dir: Option<&Path>) -> Result<PathBuf> {
        let source = file.format()?;
        let path = match self {
            Self::Compress { .. } => output_path(input, output_dir, "compressed_", source.extension()),
            Self::Resize { .. } => output_path(input, output_dir, "resized_", source.extension()),
            Self::Convert { to } => {
                let path = output_path(input, output_dir, "", to.extension());
                if path == input {
                    output_path(input, output_dir, "converted_", to.extension())
                } else {
                    path
                }
            }
        };
        Ok(path)
    }

    async fn process(self, input: &Path, file: &ImageFile, output_dir: Option<&Path>) -> Result<Outcome> {
        let output = self.output_for(input, file, output_dir)?;

        let (data, detail) = match self {
            Self::Compress { quality } => {
                let result = compress_image(file, quality).await?;
                let detail = format!(
                    "{} -> {} ({:.1}% saved)",
                    format_file_size(result.original_size, None),
                    format_file_size(result.compressed_size, None),
                    result.savings_percent()
                );
                (result.data, detail)
            }
            Self::Resize {
                width,
                height,
                maintain_aspect,
            } => {
                let data = resize_image(file, width, height, maintain_aspect).await?;
                let detail = format_file_size(data.len() as u64, None);
                (data, detail)
            }
            Self::Convert { to } => {
                let data = convert_image(file, to).await?;
                let detail = format!("{} ({})", format_file_size(data.len() as u64, None), to.mime());
                (data, detail)
            }
        };

        tokio::fs::write(&output, &data)
            .await
            .with_context(|| format!("failed to write {}", output.display()))?;

        Ok(Outcome { output, detail })
    }
}

/// Run an image command to completion on a fresh runtime.
pub fn run_image(action: &ImageCommand, config: &ToolConfig) -> Result<()> {
    let (job, batch) = Job::from_command(action, config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(run_batch(job, batch, config))
}

async fn run_batch(job: Job, batch: ImageBatchArgs, config: &ToolConfig) -> Result<()> {
    if let Some(dir) = &batch.output {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let total = batch.files.len();
    let mut failed = 0;
    let inputs = load_inputs(&batch.files, config.image.max_size_bytes(), &mut failed);

    if !inputs.is_empty() {
        log!("image"; "{} {}", job.label(), plural_count(inputs.len(), "file"));
    }

    let outcomes = process_all(job, inputs, batch.output).await?;
    for (input, outcome) in outcomes {
        match outcome {
            Ok(Outcome { output, detail }) => {
                logger::success(&format!("{} -> {}: {detail}", input.display(), output.display()));
            }
            Err(err) => {
                failed += 1;
                logger::failure(&input.display().to_string(), &format!("{err:#}"));
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} failed", plural_count(failed, "image"), total);
    }
    log!("done"; "{}", plural_count(total, "image"));
    Ok(())
}

/// Open and validate every input, reporting the ones that are rejected.
fn load_inputs(paths: &[PathBuf], max_size: u64, failed: &mut usize) -> Vec<(PathBuf, ImageFile)> {
    let mut inputs = Vec::with_capacity(paths.len());

    for path in paths {
        let file = match ImageFile::open(path) {
            Ok(file) => file,
            Err(err) => {
                *failed += 1;
                logger::failure(&path.display().to_string(), &err.to_string());
                continue;
            }
        };

        if let Err(message) = validate_image_file(&file, max_size).into_result() {
            *failed += 1;
            logger::failure(&path.display().to_string(), &message);
            continue;
        }

        debug!("image"; "{} ({}, {})", file.name, file.mime, format_file_size(file.size(), None));
        inputs.push((path.clone(), file));
    }

    inputs
}

/// Process all inputs concurrently, returning outcomes in input order.
async fn process_all(
    job: Job,
    inputs: Vec<(PathBuf, ImageFile)>,
    output_dir: Option<PathBuf>,
) -> Result<Vec<(PathBuf, Result<Outcome>)>> {
    if inputs.is_empty() {
        return Ok(Vec::new());
    }

    let progress = Arc::new(ProgressLine::new(&[(job.label(), inputs.len())]));
    let output_dir: Option<Arc<Path>> = output_dir.map(Arc::from);
    let mut tasks = JoinSet::new();

    for (index, (path, file)) in inputs.into_iter().enumerate() {
        let progress = Arc::clone(&progress);
        let output_dir = output_dir.clone();
        tasks.spawn(async move {
            let outcome = job.process(&path, &file, output_dir.as_deref()).await;
            progress.inc(job.label());
            (index, path, outcome)
        });
    }

    let mut results = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        results.push(joined.context("image task did not complete")?);
    }

    if let Ok(progress) = Arc::try_unwrap(progress) {
        progress.finish();
    }

    results.sort_by_key(|(index, _, _)| *index);
    Ok(results
        .into_iter()
        .map(|(_, path, outcome)| (path, outcome))
        .collect())
}
