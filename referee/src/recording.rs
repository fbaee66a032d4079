use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use codex::{GameConfig, Snapshot};
use serde::Serialize;

/// Writes the snapshots of each match to a numbered JSON file.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    snapshots: Vec<Snapshot>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            snapshots: Vec::new(),
        })
    }

    pub fn store_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn write_game_recording(&mut self, config: &GameConfig) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(&filepath)?);
        let recording = GameRecording {
            config,
            snapshots: &self.snapshots,
        };
        serde_json::to_writer_pretty(writer, &recording)?;
        self.snapshots.clear();
        self.num += 1;
        Ok(filepath)
    }
}

#[derive(Serialize)]
struct GameRecording<'a> {
    config: &'a GameConfig,
    snapshots: &'a [Snapshot],
}
