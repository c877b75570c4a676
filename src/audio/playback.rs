// src/audio/playback.rs  —  Stop / completion handle shared between caller and sink
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Default)]
struct Flags {
    cancel:   AtomicBool,
    finished: AtomicBool,
}

/// Caller side of one playback
#[derive(Debug)]
pub struct Playback {
    flags: Arc<Flags>,
    done:  Receiver<()>,
}

/// Sink side of one playback
#[derive(Debug)]
pub struct PlaybackSignal {
    flags: Arc<Flags>,
    done:  Sender<()>,
}

/// A linked caller/sink pair
pub fn channel() -> (Playback, PlaybackSignal) {
    let flags = Arc::new(Flags::default());
    let (tx, rx) = mpsc::channel();
    (
        Playback { flags: Arc::clone(&flags), done: rx },
        PlaybackSignal { flags, done: tx },
    )
}

impl Playback {
    /// Ask the sink to stop pulling samples
    pub fn stop(&self) {
        self.flags.cancel.store(true, Ordering::SeqCst);
    }

    pub fn is_finished(&self) -> bool {
        self.flags.finished.load(Ordering::SeqCst)
    }

    /// Block until the stream has drained or was stopped
    pub fn wait(&self) {
        // Err means the sink dropped its side, which also ends playback
        let _ = self.done.recv();
    }

    /// Returns true if playback completed within `timeout`
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        match self.done.recv_timeout(timeout) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => true,
            Err(RecvTimeoutError::Timeout) => self.is_finished(),
        }
    }
}

impl PlaybackSignal {
    pub fn is_cancelled(&self) -> bool {
        self.flags.cancel.load(Ordering::SeqCst)
    }

    /// Mark playback complete and wake the waiter
    pub fn finish(self) {
        self.flags.finished.store(true, Ordering::SeqCst);
        let _ = self.done.send(());
    }
}
