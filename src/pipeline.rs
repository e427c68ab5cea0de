use std::path::PathBuf;

use rayon::prelude::*;

use crate::encode::bmp::{BmpFormat, EncodeBmp};
use crate::encode::sink::AssetSink;
use crate::foundation::core::{EYELID_SIZE, IRIS_HEIGHT, IRIS_WIDTH};
use crate::foundation::error::{EyeError, EyeResult};
use crate::raster::field::rasterize_field;
use crate::raster::mask::rasterize_lid;
use crate::shape::iris::IrisField;
use crate::shape::lids::{LidRole, Mood};

/// One bitmap to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssetJob {
    /// A 240x240 1 bpp eyelid mask.
    Eyelid { mood: Mood, role: LidRole },
    /// A 128x128 RGB565 polar iris texture.
    Iris { mood: Mood },
}

impl AssetJob {
    /// Output location relative to the moods directory, e.g. `sad/upper.bmp`.
    pub fn rel_path(&self) -> PathBuf {
        match *self {
            Self::Eyelid { mood, role } => {
                PathBuf::from(mood.name()).join(format!("{}.bmp", role.name()))
            }
            Self::Iris { mood } => PathBuf::from(mood.name()).join("iris.bmp"),
        }
    }

    pub fn format(&self) -> BmpFormat {
        match self {
            Self::Eyelid { .. } => BmpFormat::Indexed1,
            Self::Iris { .. } => BmpFormat::Rgb565,
        }
    }

    /// Rasterize and encode this asset.
    pub fn render(&self) -> EyeResult<Vec<u8>> {
        match *self {
            Self::Eyelid { mood, role } => {
                rasterize_lid(mood.curve(role), EYELID_SIZE, role)?.encode_bmp()
            }
            Self::Iris { mood } => {
                if !mood.has_iris() {
                    return Err(EyeError::validation(format!(
                        "mood '{mood}' has no iris texture"
                    )));
                }
                rasterize_field(&IrisField::love(), IRIS_WIDTH, IRIS_HEIGHT)?.encode_bmp()
            }
        }
    }
}

/// What to generate and how.
#[derive(Clone, Debug)]
pub struct GenerateOpts {
    /// Moods to cover, in output order. Duplicates are ignored.
    pub moods: Vec<Mood>,
    /// Emit upper/lower eyelid masks.
    pub eyelids: bool,
    /// Emit iris textures for moods that have one.
    pub iris: bool,
    /// Rasterize jobs on a rayon pool.
    pub parallel: bool,
    /// Explicit worker count for the pool (parallel mode only).
    pub threads: Option<usize>,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            moods: Mood::ALL.to_vec(),
            eyelids: true,
            iris: true,
            parallel: false,
            threads: None,
        }
    }
}

impl GenerateOpts {
    pub fn validate(&self) -> EyeResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(EyeError::validation("'threads' must be >= 1 when set"));
        }
        Ok(())
    }
}

/// A file produced by [`generate`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GeneratedAsset {
    pub job: AssetJob,
    pub format: BmpFormat,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Expand options into the ordered list of assets to produce.
pub fn plan_jobs(opts: &GenerateOpts) -> Vec<AssetJob> {
    let mut seen = Vec::with_capacity(opts.moods.len());
    let mut jobs = Vec::new();
    for &mood in &opts.moods {
        if seen.contains(&mood) {
            continue;
        }
        seen.push(mood);
        if opts.eyelids {
            jobs.extend(LidRole::BOTH.map(|role| AssetJob::Eyelid { mood, role }));
        }
        if opts.iris && mood.has_iris() {
            jobs.push(AssetJob::Iris { mood });
        }
    }
    jobs
}

/// Render every job, returning encoded files in job order.
#[tracing::instrument(skip(jobs), fields(job_count = jobs.len()))]
pub fn render_jobs(
    jobs: &[AssetJob],
    parallel: bool,
    threads: Option<usize>,
) -> EyeResult<Vec<Vec<u8>>> {
    if !parallel {
        return jobs.iter().map(AssetJob::render).collect();
    }
    let pool = build_thread_pool(threads)?;
    pool.install(|| jobs.par_iter().map(AssetJob::render).collect())
}

/// Plan, render and store all requested assets.
///
/// Files are handed to `sink` in job order regardless of threading.
#[tracing::instrument(skip(opts, sink))]
pub fn generate(opts: &GenerateOpts, sink: &mut dyn AssetSink) -> EyeResult<Vec<GeneratedAsset>> {
    opts.validate()?;
    let jobs = plan_jobs(opts);
    if jobs.is_empty() {
        return Err(EyeError::validation("nothing to generate for the selected options"));
    }

    let encoded = render_jobs(&jobs, opts.parallel, opts.threads)?;

    let mut out = Vec::with_capacity(jobs.len());
    for (job, bytes) in jobs.into_iter().zip(encoded) {
        let path = sink.write_asset(&job.rel_path(), &bytes)?;
        tracing::debug!(?job, bytes = bytes.len(), "generated");
        out.push(GeneratedAsset {
            job,
            format: job.format(),
            path,
            bytes: bytes.len(),
        });
    }
    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> EyeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(EyeError::validation("'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| EyeError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/pipeline/pipeline.rs"]
mod tests;
