//! JSON-lines snapshot recordings.
//!
//! A recording is one `{"type":"setup",...}` record followed by any number of
//! `{"type":"tick",...}` records, one per line. Paths ending in `.gz` are
//! gzip-compressed.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use ipnviz_data::{SetupSnapshot, TickSnapshot};
use serde::{Deserialize, Serialize};

use crate::error::{FeedError, Result};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RecordLine {
    Setup(SetupSnapshot),
    Tick(TickSnapshot),
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Every node index a tick names, in links, events and flags, must exist in
/// the setup.
fn check_node_indices(tick: &TickSnapshot, nodes: usize, line: usize) -> Result<()> {
    let pairs = [
        ("connectableNodeIndices", &tick.connectable_node_indices),
        ("sendingNodeIndices", &tick.sending_node_indices),
    ];
    let events = [
        ("creatingNodeIndices", &tick.creating_node_indices),
        ("deliveringNodeIndices", &tick.delivering_node_indices),
        ("occludedNodeIndices", &tick.occluded_node_indices),
    ];
    let referenced = pairs
        .into_iter()
        .flat_map(|(field, pairs)| pairs.iter().map(move |pair| (field, pair.high())))
        .chain(
            events
                .into_iter()
                .flat_map(|(field, indices)| indices.iter().map(move |&index| (field, index))),
        )
        .chain(
            tick.highlighted_node_index
                .map(|index| ("highlightedNodeIndex", index)),
        );

    for (field, index) in referenced {
        if index >= nodes {
            return Err(FeedError::IndexOutOfRange {
                line,
                field,
                index,
                nodes,
            });
        }
    }
    Ok(())
}

/// A fully loaded recording.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recording {
    pub setup: SetupSnapshot,
    pub ticks: Vec<TickSnapshot>,
}

impl Recording {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let recording = if is_gzip(path) {
            Self::from_reader(BufReader::new(GzDecoder::new(file)))?
        } else {
            Self::from_reader(BufReader::new(file))?
        };
        tracing::info!(
            path = %path.display(),
            nodes = recording.setup.nodes.len(),
            bodies = recording.setup.bodies.len(),
            ticks = recording.ticks.len(),
            "Recording loaded"
        );
        Ok(recording)
    }

    /// Parses records line by line. Blank lines are skipped; line numbers in
    /// errors are 1-based.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut setup: Option<SetupSnapshot> = None;
        let mut ticks = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: RecordLine =
                serde_json::from_str(&line).map_err(|source| FeedError::Json { line: line_no, source })?;
            match record {
                RecordLine::Setup(snapshot) => {
                    if setup.is_some() {
                        return Err(FeedError::DuplicateSetup { line: line_no });
                    }
                    setup = Some(snapshot);
                }
                RecordLine::Tick(tick) => {
                    let Some(setup) = setup.as_ref() else {
                        return Err(FeedError::MissingSetup { line: line_no });
                    };
                    if tick.nodes.len() != setup.nodes.len() || tick.bodies.len() != setup.bodies.len() {
                        return Err(FeedError::Misaligned {
                            line: line_no,
                            nodes: tick.nodes.len(),
                            bodies: tick.bodies.len(),
                            expected_nodes: setup.nodes.len(),
                            expected_bodies: setup.bodies.len(),
                        });
                    }
                    check_node_indices(&tick, setup.nodes.len(), line_no)?;
                    ticks.push(tick);
                }
            }
        }

        let setup = setup.ok_or(FeedError::Empty)?;
        Ok(Self { setup, ticks })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = RecordingWriter::create(path, &self.setup)?;
        for tick in &self.ticks {
            writer.push(tick)?;
        }
        writer.finish()
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Simulation time of the last tick, in nanoseconds.
    pub fn duration(&self) -> u64 {
        self.ticks.last().map_or(0, |tick| tick.time)
    }
}

enum Sink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl Sink {
    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Sink::Plain(writer) => writer,
            Sink::Gzip(encoder) => encoder,
        }
    }
}

/// Streams records to a recording file as they are produced.
pub struct RecordingWriter {
    sink: Sink,
    ticks: usize,
}

impl RecordingWriter {
    /// Creates the file and writes the setup record.
    pub fn create(path: impl AsRef<Path>, setup: &SetupSnapshot) -> Result<Self> {
        let path = path.as_ref();
        let file = BufWriter::new(File::create(path)?);
        let sink = if is_gzip(path) {
            Sink::Gzip(GzEncoder::new(file, Compression::default()))
        } else {
            Sink::Plain(file)
        };
        let mut writer = Self { sink, ticks: 0 };
        writer.write_record(&RecordLine::Setup(setup.clone()))?;
        Ok(writer)
    }

    pub fn push(&mut self, tick: &TickSnapshot) -> Result<()> {
        self.write_record(&RecordLine::Tick(tick.clone()))?;
        self.ticks += 1;
        Ok(())
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// Flushes buffered records and, for gzip files, writes the trailer.
    pub fn finish(self) -> Result<()> {
        match self.sink {
            Sink::Plain(mut writer) => writer.flush()?,
            Sink::Gzip(encoder) => encoder.finish()?.flush()?,
        }
        Ok(())
    }

    fn write_record(&mut self, record: &RecordLine) -> Result<()> {
        let json = serde_json::to_string(record)?;
        writeln!(self.sink.writer(), "{json}")?;
        Ok(())
    }
}
