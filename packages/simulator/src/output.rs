//! JSON-lines output for simulation results.

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use engine::domain::Shape;
use engine::{PassPolicy, PlayerId};
use serde::Serialize;

use crate::simulator::GameResult;

/// One line of output per simulated game.
#[derive(Debug, Serialize)]
pub struct GameRecord<'a> {
    pub game: u32,
    pub seed: u64,
    pub players: usize,
    pub pass_policy: PassPolicy,
    pub winner: Option<PlayerId>,
    pub finish_order: &'a [PlayerId],
    pub standings: &'a [PlayerId],
    pub tricks: u32,
    pub actions: usize,
    pub cards_played: &'a [usize],
    pub tricks_won: &'a [u32],
    pub shape_counts: &'a BTreeMap<Shape, usize>,
    pub duration_ms: f64,
}

impl<'a> GameRecord<'a> {
    pub fn new(
        game: u32,
        players: usize,
        pass_policy: PassPolicy,
        result: &'a GameResult,
        duration_ms: f64,
    ) -> Self {
        Self {
            game,
            seed: result.seed,
            players,
            pass_policy,
            winner: result.winner(),
            finish_order: &result.finish_order,
            standings: &result.standings,
            tricks: result.tricks,
            actions: result.actions,
            cards_played: &result.cards_played,
            tricks_won: &result.tricks_won,
            shape_counts: &result.shape_counts,
            duration_ms,
        }
    }
}

pub struct OutputWriter {
    writer: Box<dyn Write + Send>,
    path: Option<PathBuf>,
}

impl OutputWriter {
    /// Write to `path`, or to stdout when no path is given.
    pub fn new(path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        match path {
            Some(path) => {
                if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                    std::fs::create_dir_all(dir)?;
                }
                let file = OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(path)?;
                Ok(Self {
                    writer: Box::new(BufWriter::new(file)),
                    path: Some(path.to_path_buf()),
                })
            }
            None => Ok(Self {
                writer: Box::new(io::stdout()),
                path: None,
            }),
        }
    }

    pub fn write_game(
        &mut self,
        record: &GameRecord<'_>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(record)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}
