//! Landmark traces in JSON Lines.
//!
//! One object per frame:
//!
//! ```json
//! {"t": 0.033, "width": 640, "height": 480, "hands": [{"score": 0.93, "landmarks": [[0.51, 0.72, 0.0], ...]}]}
//! {"t": 0.066, "dropped": true}
//! ```
//!
//! `t` is seconds since the stream started; when absent the wall clock is
//! used. Each hand needs exactly 21 `[x, y]` or `[x, y, z]` points.
//! Dropped, malformed, or incomplete records are reported as unavailable
//! frames so the loop skips them.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use gesturectl_common::constants::HAND_LANDMARK_COUNT;
use gesturectl_common::error::{GesturectlError, Result};
use gesturectl_common::types::{HandLandmarks, Landmark};
use serde::Deserialize;

use super::FrameSource;
use crate::frame::Frame;

#[derive(Debug, Deserialize)]
struct TraceRecord {
    #[serde(default)]
    t: Option<f64>,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    hands: Vec<TraceHand>,
    #[serde(default)]
    dropped: bool,
}

#[derive(Debug, Deserialize)]
struct TraceHand {
    #[serde(default = "full_score")]
    score: f32,
    landmarks: Vec<Vec<f32>>,
}

const fn full_score() -> f32 {
    1.0
}

/// Reads frames from a JSON Lines landmark trace.
#[derive(Debug)]
pub struct TraceSource<R> {
    reader: R,
    name: PathBuf,
    line: String,
    line_number: u64,
    next_index: u64,
    started: Instant,
}

impl TraceSource<BufReader<File>> {
    /// Opens a trace file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| GesturectlError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::info!(path = %path.display(), "opened landmark trace");
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> TraceSource<R> {
    /// Wraps any buffered reader; `name` labels I/O errors.
    pub fn new(reader: R, name: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            name: name.into(),
            line: String::new(),
            line_number: 0,
            next_index: 0,
            started: Instant::now(),
        }
    }

    fn parse_line(&self, index: u64) -> Result<Frame> {
        let record: TraceRecord =
            serde_json::from_str(self.line.trim()).map_err(|e| self.unavailable(e))?;
        if record.dropped {
            return Err(self.unavailable("frame dropped by capture"));
        }
        let (Some(width), Some(height)) = (record.width, record.height) else {
            return Err(self.unavailable("missing frame width or height"));
        };
        if width == 0 || height == 0 {
            return Err(self.unavailable("frame has zero size"));
        }
        let timestamp = match record.t {
            Some(t) => Duration::try_from_secs_f64(t)
                .map_err(|e| self.unavailable(format!("invalid timestamp {t}: {e}")))?,
            None => self.started.elapsed(),
        };
        let hands = record
            .hands
            .iter()
            .map(|hand| self.parse_hand(hand))
            .collect::<Result<Vec<_>>>()?;

        Ok(Frame {
            index,
            width,
            height,
            timestamp,
            hands,
        })
    }

    fn parse_hand(&self, hand: &TraceHand) -> Result<HandLandmarks> {
        let points = hand
            .landmarks
            .iter()
            .map(|p| match p.as_slice() {
                [x, y] => Ok(Landmark::new(*x, *y, 0.0)),
                [x, y, z] => Ok(Landmark::new(*x, *y, *z)),
                other => Err(self.unavailable(format!(
                    "landmark has {} coordinates, expected 2 or 3",
                    other.len()
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        HandLandmarks::from_slice(&points, hand.score).map_err(|_| {
            self.unavailable(format!(
                "hand has {} landmarks, expected {HAND_LANDMARK_COUNT}",
                points.len()
            ))
        })
    }

    fn unavailable(&self, reason: impl std::fmt::Display) -> GesturectlError {
        GesturectlError::FrameUnavailable {
            reason: format!("{}:{}: {reason}", self.name.display(), self.line_number),
        }
    }
}

impl<R: BufRead> FrameSource for TraceSource<R> {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        loop {
            self.line.clear();
            let read = self
                .reader
                .read_line(&mut self.line)
                .map_err(|e| GesturectlError::Io {
                    path: self.name.clone(),
                    source: e,
                })?;
            if read == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            if self.line.trim().is_empty() {
                continue;
            }
            let index = self.next_index;
            self.next_index += 1;
            return self.parse_line(index).map(Some);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand_json(x: f32, y: f32) -> String {
        let points: Vec<String> = (0..21).map(|_| format!("[{x}, {y}, 0.0]")).collect();
        format!(r#"{{"score": 0.9, "landmarks": [{}]}}"#, points.join(", "))
    }

    fn source(text: &str) -> TraceSource<&[u8]> {
        TraceSource::new(text.as_bytes(), "trace.jsonl")
    }

    #[test]
    fn reads_frames_in_order() {
        let text = format!(
            "{{\"t\": 0.0, \"width\": 640, \"height\": 480, \"hands\": []}}\n\
             {{\"t\": 0.5, \"width\": 640, \"height\": 480, \"hands\": [{}]}}\n",
            hand_json(0.25, 0.5)
        );
        let mut src = source(&text);

        let first = src.next_frame().expect("read").expect("frame");
        assert_eq!(first.index, 0);
        assert!(first.hands.is_empty());

        let second = src.next_frame().expect("read").expect("frame");
        assert_eq!(second.index, 1);
        assert_eq!(second.timestamp, Duration::from_millis(500));
        assert_eq!(second.hands.len(), 1);
        assert!((second.hands[0].score - 0.9).abs() < f32::EPSILON);

        assert!(src.next_frame().expect("read").is_none());
    }

    #[test]
    fn blank_lines_are_ignored() {
        let mut src = source("\n\n{\"width\": 10, \"height\": 10}\n\n");
        assert!(src.next_frame().expect("read").is_some());
        assert!(src.next_frame().expect("read").is_none());
    }

    #[test]
    fn dropped_frame_is_unavailable_and_stream_continues() {
        let mut src = source(
            "{\"t\": 0.1, \"dropped\": true}\n{\"t\": 0.2, \"width\": 640, \"height\": 480}\n",
        );
        let err = src.next_frame().unwrap_err();
        assert!(err.is_frame_unavailable());
        assert!(err.to_string().contains("trace.jsonl:1"), "got: {err}");

        let frame = src.next_frame().expect("read").expect("frame");
        assert_eq!(frame.index, 1);
    }

    #[test]
    fn malformed_line_is_unavailable() {
        let mut src = source("not json\n");
        assert!(src.next_frame().unwrap_err().is_frame_unavailable());
    }

    #[test]
    fn short_hand_is_unavailable() {
        let text = r#"{"width": 640, "height": 480, "hands": [{"landmarks": [[0.1, 0.2]]}]}"#;
        let err = source(text).next_frame().unwrap_err();
        assert!(err.is_frame_unavailable());
        assert!(err.to_string().contains("1 landmarks"), "got: {err}");
    }

    #[test]
    fn missing_dimensions_are_unavailable() {
        let err = source("{\"t\": 0.0}\n").next_frame().unwrap_err();
        assert!(err.to_string().contains("width or height"), "got: {err}");
    }

    #[test]
    fn out_of_range_timestamps_are_unavailable() {
        for t in ["-1.0", "1e20"] {
            let text = format!("{{\"t\": {t}, \"width\": 640, \"height\": 480}}\n");
            let err = source(&text).next_frame().unwrap_err();
            assert!(err.is_frame_unavailable(), "t = {t}");
            assert!(err.to_string().contains("invalid timestamp"), "got: {err}");
        }
    }

    #[test]
    fn stream_continues_after_an_out_of_range_timestamp() {
        let mut src = source(
            "{\"t\": 1e20, \"width\": 640, \"height\": 480}\n{\"t\": 0.2, \"width\": 640, \"height\": 480}\n",
        );
        assert!(src.next_frame().is_err());
        let frame = src.next_frame().expect("read").expect("frame");
        assert_eq!(frame.timestamp, Duration::from_millis(200));
    }

    #[test]
    fn two_coordinate_points_default_depth() {
        let points: Vec<String> = (0..21).map(|_| "[0.5, 0.5]".to_owned()).collect();
        let text = format!(
            r#"{{"width": 64, "height": 48, "hands": [{{"landmarks": [{}]}}]}}"#,
            points.join(",")
        );
        let frame = source(&text).next_frame().expect("read").expect("frame");
        let hand = &frame.hands[0];
        assert!((hand.score - 1.0).abs() < f32::EPSILON);
        assert!(hand.landmarks.iter().all(|lm| lm.z.abs() < f32::EPSILON));
    }

    #[test]
    fn open_reads_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("trace.jsonl");
        std::fs::write(&path, "{\"width\": 640, \"height\": 480}\n").expect("write");
        let mut src = TraceSource::open(&path).expect("open");
        assert!(src.next_frame().expect("read").is_some());

        let err = TraceSource::open(&dir.path().join("missing.jsonl")).unwrap_err();
        assert!(matches!(err, GesturectlError::Io { .. }));
    }
}
