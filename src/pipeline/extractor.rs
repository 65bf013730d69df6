use anyhow::{Context, Result};
use crossbeam_channel::Sender;
use image::DynamicImage;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use super::cropper::crop_icon;
use super::fs_ops::ensure_dir;
use super::png_writer::write_png;
use super::sprite::{check_png_support, check_sprite_exists, load_sprite};
use crate::config::Config;
use crate::error::SetupError;
use crate::event::ExtractMsg;
use crate::model::IconDescriptor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconOutcome {
    Written { name: String, file_name: String },
    Failed { name: String, error: String },
}

impl IconOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, IconOutcome::Written { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub total: usize,
    pub outcomes: Vec<IconOutcome>,
    pub output_dir: PathBuf,
}

impl RunSummary {
    fn from_outcomes(outcomes: Vec<IconOutcome>, output_dir: &Path) -> Self {
        Self {
            succeeded: outcomes.iter().filter(|o| o.is_written()).count(),
            total: outcomes.len(),
            outcomes,
            output_dir: output_dir.to_path_buf(),
        }
    }

    pub fn failed(&self) -> usize {
        self.total.saturating_sub(self.succeeded)
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }
}

/// Cuts every configured icon out of the sprite sheet.
///
/// Setup problems (no PNG support, missing or unreadable sprite, unusable
/// output directory) abort the run. A failing icon is reported and skipped;
/// the remaining icons are still written.
pub fn run(config: &Config, tx: &Sender<ExtractMsg>) -> Result<RunSummary, SetupError> {
    let _ = tx.send(ExtractMsg::Started);

    check_png_support()?;

    check_sprite_exists(&config.sprite_path)?;
    let _ = tx.send(ExtractMsg::SpriteFound(config.sprite_path.clone()));

    ensure_dir(&config.output_dir).map_err(|source| SetupError::OutputDir {
        path: config.output_dir.clone(),
        source,
    })?;
    let _ = tx.send(ExtractMsg::OutputDirReady(config.output_dir.clone()));

    let sprite = load_sprite(&config.sprite_path)?;
    let _ = tx.send(ExtractMsg::SpriteLoaded {
        width: sprite.width(),
        height: sprite.height(),
    });

    let _ = tx.send(ExtractMsg::CuttingStarted(config.icons.len()));

    let outcomes = if config.thread_count == 1 {
        config
            .icons
            .iter()
            .map(|icon| {
                let outcome = cut_one(&sprite, icon, &config.output_dir);
                report(icon, &outcome, tx);
                outcome
            })
            .collect()
    } else {
        let outcomes = cut_parallel(&sprite, &config.icons, &config.output_dir, config.thread_count);
        for (icon, outcome) in config.icons.iter().zip(&outcomes) {
            report(icon, outcome, tx);
        }
        outcomes
    };

    let summary = RunSummary::from_outcomes(outcomes, &config.output_dir);
    let _ = tx.send(ExtractMsg::Completed(summary.clone()));
    Ok(summary)
}

fn cut_parallel(
    sprite: &DynamicImage,
    icons: &[IconDescriptor],
    output_dir: &Path,
    thread_count: usize,
) -> Vec<IconOutcome> {
    let cut_all = || {
        icons
            .par_iter()
            .map(|icon| cut_one(sprite, icon, output_dir))
            .collect::<Vec<_>>()
    };

    match rayon::ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .build()
    {
        Ok(pool) => {
            log::debug!("cutting {} icons on {} threads", icons.len(), pool.current_num_threads());
            pool.install(cut_all)
        }
        Err(e) => {
            log::warn!("Cannot build thread pool ({}), using the global one", e);
            cut_all()
        }
    }
}

fn cut_one(sprite: &DynamicImage, icon: &IconDescriptor, output_dir: &Path) -> IconOutcome {
    match save_icon(sprite, icon, output_dir) {
        Ok(file_name) => IconOutcome::Written {
            name: icon.name.to_string(),
            file_name,
        },
        Err(e) => {
            log::warn!("icon {} failed: {:#}", icon.name, e);
            IconOutcome::Failed {
                name: icon.name.to_string(),
                error: format!("{:#}", e),
            }
        }
    }
}

fn save_icon(sprite: &DynamicImage, icon: &IconDescriptor, output_dir: &Path) -> Result<String> {
    let cropped = crop_icon(sprite, icon).context("crop failed")?;
    let file_name = icon.file_name();
    write_png(&cropped, &output_dir.join(&file_name))?;
    Ok(file_name)
}

fn report(icon: &IconDescriptor, outcome: &IconOutcome, tx: &Sender<ExtractMsg>) {
    let msg = match outcome {
        IconOutcome::Written { name, file_name } => ExtractMsg::IconWritten {
            name: name.clone(),
            x: icon.x,
            y: icon.y,
            file_name: file_name.clone(),
        },
        IconOutcome::Failed { name, error } => ExtractMsg::IconFailed {
            name: name.clone(),
            error: error.clone(),
        },
    };
    let _ = tx.send(msg);
}
