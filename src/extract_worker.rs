// Runs the icon extraction on its own thread and streams progress back

use crossbeam_channel::{Receiver, Sender, unbounded};
use std::thread::{self, JoinHandle};

use crate::config::Config;
use crate::event::ExtractMsg;
use crate::pipeline::extractor;

pub struct ExtractWorker {
    tx: Sender<ExtractMsg>,
}

impl ExtractWorker {
    pub fn new(tx: Sender<ExtractMsg>) -> Self {
        Self { tx }
    }

    /// Returns a receiver that yields every message of one run, ending with
    /// either `Completed` or `Failed`.
    pub fn spawn(config: Config) -> (Receiver<ExtractMsg>, JoinHandle<()>) {
        let (tx, rx) = unbounded();
        let handle = Self::new(tx).start(config);
        (rx, handle)
    }

    pub fn start(self, config: Config) -> JoinHandle<()> {
        thread::spawn(move || self.run(&config))
    }

    fn run(&self, config: &Config) {
        if let Err(e) = extractor::run(config, &self.tx) {
            let _ = self.tx.send(ExtractMsg::Failed {
                message: e.to_string(),
                hint: e.hint().map(str::to_string),
                exit_code: e.exit_code(),
            });
        }
    }
}

/// Hands every message to `on_msg` until the worker finishes and returns
/// the process exit status: the code of the last `Failed` message, 1 if
/// the worker panicked, 0 otherwise.
pub fn drain_exit_code(
    rx: Receiver<ExtractMsg>,
    handle: JoinHandle<()>,
    mut on_msg: impl FnMut(&ExtractMsg),
) -> i32 {
    let mut exit_code = 0;
    for msg in rx.iter() {
        on_msg(&msg);
        if let ExtractMsg::Failed { exit_code: code, .. } = msg {
            exit_code = code;
        }
    }

    if handle.join().is_err() {
        log::error!("extraction thread panicked");
        exit_code = 1;
    }
    exit_code
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_worker_reports_failure() {
        let dir = tempdir().unwrap();
        let (rx, handle) = ExtractWorker::spawn(Config::with_root(dir.path()));
        handle.join().unwrap();

        let last = rx.iter().last().unwrap();
        match last {
            ExtractMsg::Failed { exit_code, hint, .. } => {
                assert_eq!(exit_code, 1);
                assert!(hint.is_some());
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_worker_reports_completion() {
        let dir = tempdir().unwrap();
        let config = Config::with_root(dir.path());
        std::fs::create_dir_all(config.sprite_path.parent().unwrap()).unwrap();
        image::RgbaImage::new(1550, 50).save(&config.sprite_path).unwrap();

        let (rx, handle) = ExtractWorker::spawn(config);
        handle.join().unwrap();

        let msgs: Vec<_> = rx.iter().collect();
        assert!(matches!(msgs.first(), Some(ExtractMsg::Started)));
        match msgs.last() {
            Some(ExtractMsg::Completed(summary)) => assert_eq!(summary.succeeded, 16),
            other => panic!("expected Completed, got {:?}", other),
        }
    }

    #[test]
    fn test_exit_code_zero_with_icon_failures() {
        let dir = tempdir().unwrap();
        let config = Config::with_root(dir.path());
        std::fs::create_dir_all(config.sprite_path.parent().unwrap()).unwrap();
        image::RgbaImage::new(800, 50).save(&config.sprite_path).unwrap();

        let (rx, handle) = ExtractWorker::spawn(config);
        let mut failed_icons = 0;
        let code = drain_exit_code(rx, handle, |msg| {
            if matches!(msg, ExtractMsg::IconFailed { .. }) {
                failed_icons += 1;
            }
        });

        assert_eq!(code, 0);
        assert_eq!(failed_icons, 8);
    }

    #[test]
    fn test_exit_code_for_missing_sprite() {
        let dir = tempdir().unwrap();
        let (rx, handle) = ExtractWorker::spawn(Config::with_root(dir.path()));

        let mut seen = Vec::new();
        let code = drain_exit_code(rx, handle, |msg| seen.push(msg.clone()));

        assert_eq!(code, 1);
        assert!(matches!(seen.last(), Some(ExtractMsg::Failed { .. })));
    }

    #[test]
    fn test_exit_code_for_panicked_worker() {
        let (tx, rx) = unbounded::<ExtractMsg>();
        let handle = thread::spawn(move || {
            let _tx = tx;
            panic!("worker died");
        });

        assert_eq!(drain_exit_code(rx, handle, |_| {}), 1);
    }
}
